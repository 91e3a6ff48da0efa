//! LaunchTerm - a keyword-driven command terminal
//!
//! Interactive front end over stdin/stdout. Type `help` for the command
//! list, `exit` or Ctrl+D to leave.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};

use launchterm::commands::{CommandResult, SessionEffect};
use launchterm::config::loader::ConfigLoader;
use launchterm::terminal::{EntryKind, Key};
use launchterm::ui::TranscriptStyle;
use launchterm::{Config, Platform, TerminalSession};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "launchterm", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", env = "LAUNCHTERM_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Record launches instead of performing them
    #[arg(long)]
    dry_run: bool,

    /// Run LINE and exit (repeatable)
    #[arg(short = 'e', long = "execute", value_name = "LINE")]
    execute: Vec<String>,
}

/// Prints transcript entries with the configured style
struct Printer {
    style: TranscriptStyle,
    color: bool,
}

impl Printer {
    fn print(&self, kind: EntryKind, text: &str) {
        println!("{}", self.style.render(kind, text, self.color));
    }

    fn banner(&self, banner: &str) {
        // Banner carries its own trailing newlines
        print!("{}", self.style.render(EntryKind::Banner, banner, self.color));
    }

    fn result(&self, result: &CommandResult) {
        self.print(
            EntryKind::Output(result.outcome),
            result.display_text.trim_end_matches('\n'),
        );
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("launchterm: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let debug_env = env::var("LAUNCHTERM_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let level = if args.debug || debug_env { "debug" } else { "warn" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();
}

fn load_configuration(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            ConfigLoader::load_from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))
        }
        None => ConfigLoader::new()
            .find_or_default()
            .context("loading configuration"),
    }
}

fn run(args: Args) -> Result<()> {
    info!("Starting {} v{}", launchterm::NAME, launchterm::VERSION);

    let config = load_configuration(&args)?;
    let printer = Printer {
        style: config.ui.style.clone(),
        color: config.ui.color && !args.no_color && io::stdout().is_terminal(),
    };

    let launcher = if args.dry_run {
        info!("Dry run: launches are recorded, not performed");
        Platform::dry_run_launcher()
    } else {
        Platform::launcher()
    };
    let mut session = TerminalSession::with_launcher(config, launcher);

    if args.execute.is_empty() {
        interactive(&mut session, &printer)
    } else {
        batch(&mut session, &printer, &args.execute);
        Ok(())
    }
}

/// Run the given lines, echoing each one
fn batch(session: &mut TerminalSession, printer: &Printer, lines: &[String]) {
    let prefix = session.interpreter().config().terminal.echo_prefix.clone();
    for line in lines {
        printer.print(EntryKind::Echo, &format!("{}{}", prefix, line));
        let result = session.submit(line);
        printer.result(&result);
        if session.is_closed() {
            break;
        }
    }
}

fn interactive(session: &mut TerminalSession, printer: &Printer) -> Result<()> {
    printer.banner(session.transcript().banner());

    let prefix = session.interpreter().config().terminal.echo_prefix.clone();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    while !session.is_closed() {
        print!("{}", printer.style.render(EntryKind::Echo, &prefix, printer.color));
        stdout.flush().context("flushing stdout")?;

        line.clear();
        let read = stdin.lock().read_line(&mut line).context("reading stdin")?;
        if read == 0 {
            // EOF is the Ctrl+D keybinding
            println!();
            session.handle_key(Key::CtrlD);
            break;
        }

        let result = session.submit(line.trim_end_matches(['\n', '\r']));
        if result.effect == SessionEffect::ClearTranscript && printer.color {
            print!("\x1b[2J\x1b[H");
            printer.banner(session.transcript().banner());
        }
        printer.result(&result);
    }

    info!("LaunchTerm shutdown complete");
    Ok(())
}
