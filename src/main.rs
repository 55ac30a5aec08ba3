// SPDX-License-Identifier: MIT
//
// hue-forge — derive color-harmony palettes from one base color.
//
// This is the main binary that wires together the crates:
//
//   hf-color   → color parsing, conversions, ANSI escapes
//   hf-palette → the six palette rules and generator options
//   hf-shell   → commands, `set` options, clipboard, rendering, session
//
// Two modes:
//
//   one-shot     generate from COLOR (default #845EC2), print swatches or
//                JSON, optionally copy one swatch with --copy
//   interactive  a `hue>` prompt over stdin driven by hf_shell::Session
//
// Options are layered: built-in defaults → --config JSON file → CLI flags
// (--no-color, --set) → `set` directives typed at the prompt.
//
// Logs go to stderr so stdout stays clean for --json.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hf_palette::GeneratorOptions;
use hf_shell::options::parse_set;
use hf_shell::{Reply, Session, ShellSettings, SwatchRef, SystemClipboard};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Base color used when none is given.
const DEFAULT_COLOR: &str = "#845EC2";

#[derive(Debug, Parser)]
#[command(
    name = "hue-forge",
    version,
    about = "Generate color-harmony palettes from a base color"
)]
struct Cli {
    /// Base color: #rrggbb, #rgb, rgb(r, g, b) or hsl(h, s%, l%)
    color: Option<String>,

    /// Print the palettes as JSON instead of swatches
    #[arg(long, conflicts_with = "interactive")]
    json: bool,

    /// Copy one swatch after generating, as PALETTE:N (e.g. triadic:1 or 3:1)
    #[arg(long, value_name = "PALETTE:N")]
    copy: Option<SwatchRef>,

    /// JSON file with generator options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Option directives, as typed after `set` (e.g. "darken=3 nocolor")
    #[arg(short, long = "set", value_name = "OPTIONS")]
    set: Vec<String>,

    /// Print plain hex values without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Start the interactive prompt
    #[arg(short, long)]
    interactive: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ─── Setup ──────────────────────────────────────────────────────────────────

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Build settings from the config file and CLI flags.
fn load_settings(cli: &Cli, color: bool) -> Result<ShellSettings> {
    let generator = match &cli.config {
        Some(path) => GeneratorOptions::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorOptions::default(),
    };

    let mut settings = ShellSettings { generator, color };
    for arg in &cli.set {
        for directive in parse_set(arg) {
            settings
                .apply(&directive)
                .with_context(|| format!("invalid --set {arg:?}"))?;
        }
    }
    Ok(settings)
}

// ─── Modes ──────────────────────────────────────────────────────────────────

fn run_once(cli: &Cli, settings: ShellSettings) -> Result<()> {
    let input = cli.color.as_deref().unwrap_or(DEFAULT_COLOR);
    let mut session = Session::new(settings, SystemClipboard::new());
    session
        .generate(input)
        .with_context(|| format!("cannot generate palettes from {input:?}"))?;

    let now = Instant::now();
    let notice = match cli.copy {
        Some(target) => Some(session.copy(target, now).context("--copy")?),
        None => None,
    };

    let mut out = io::stdout().lock();
    if cli.json {
        let set = session.current().context("no palettes generated")?;
        let json = set.to_json().context("failed to serialize palettes")?;
        writeln!(out, "{json}")?;
        if let Some(notice) = notice {
            eprintln!("{}", notice.status_line());
        }
    } else if let Some(text) = session.render(now) {
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}

fn print_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    if reply.output.is_empty() {
        return Ok(());
    }
    out.write_all(reply.output.as_bytes())?;
    if !reply.output.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

fn run_interactive(cli: &Cli, settings: ShellSettings) -> Result<()> {
    let mut session = Session::new(settings, SystemClipboard::new());
    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();

    match &cli.color {
        Some(color) => print_reply(&mut out, &session.handle(color, Instant::now()))?,
        None => writeln!(out, "enter a color (try {DEFAULT_COLOR}) or `help`")?,
    }

    let mut line = String::new();
    loop {
        write!(out, "hue> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read stdin")? == 0 {
            writeln!(out)?;
            break;
        }

        let reply = session.handle(&line, Instant::now());
        print_reply(&mut out, &reply)?;
        if reply.quit {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = !cli.no_color && io::stdout().is_terminal();
    let settings = load_settings(&cli, color)?;
    debug!(?settings, interactive = cli.interactive, "starting");

    if cli.interactive {
        run_interactive(&cli, settings)
    } else {
        run_once(&cli, settings)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hf_palette::PaletteKind;
    use hf_shell::command::PaletteRef;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hue-forge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let c = cli(&[]);
        assert_eq!(c.color, None);
        assert!(!c.json && !c.interactive && !c.no_color);
        assert_eq!(c.verbose, 0);
    }

    #[test]
    fn copy_flag_parses_swatch() {
        let c = cli(&["#6CE68D", "--copy", "triadic:1"]);
        assert_eq!(c.color.as_deref(), Some("#6CE68D"));
        let copy = c.copy.unwrap();
        assert_eq!(copy.palette, PaletteRef::Kind(PaletteKind::Triadic));
        assert_eq!(copy.index, 0);
    }

    #[test]
    fn bad_copy_flag_rejected() {
        let args = ["hue-forge", "--copy", "triadic"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn json_conflicts_with_interactive() {
        assert!(Cli::try_parse_from(["hue-forge", "--json", "-i"]).is_err());
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(cli(&["-vv"]).verbose, 2);
    }

    #[test]
    fn set_flags_layer_over_defaults() {
        let c = cli(&["-s", "darken=3 steps=7", "--set", "nocolor"]);
        let settings = load_settings(&c, true).unwrap();
        assert_eq!(settings.generator.darken, 3.0);
        assert_eq!(settings.generator.gradient_steps, 7);
        assert!(!settings.color);
    }

    #[test]
    fn bad_set_flag_is_error() {
        let c = cli(&["--set", "sepia=1"]);
        let err = load_settings(&c, true).unwrap_err();
        assert!(format!("{err:#}").contains("unknown option: sepia"));
    }

    #[test]
    fn config_file_layers_under_set() {
        let path = std::env::temp_dir().join(format!("hue-forge-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "darken": 4.0, "brighten": 0.5 }"#).unwrap();
        let c = cli(&["--config", path.to_str().unwrap(), "--set", "darken=1.5"]);
        let settings = load_settings(&c, false).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings.generator.brighten, 0.5);
        assert_eq!(settings.generator.darken, 1.5);
    }

    #[test]
    fn missing_config_is_error() {
        let c = cli(&["--config", "/nonexistent/hue-forge.json"]);
        assert!(load_settings(&c, false).is_err());
    }

    #[test]
    fn reply_gets_trailing_newline() {
        let mut buf = Vec::new();
        print_reply(&mut buf, &Reply { output: "darken=2".into(), quit: false }).unwrap();
        print_reply(&mut buf, &Reply::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "darken=2\n");
    }
}
