use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser as ClapParser, ValueEnum};

use pgn_syntax::config::{EngineConfig, RecoveryMode};
use pgn_syntax::diagnostics::DiagnosticsPrinter;
use pgn_syntax::{parse_json, parse_pgn_with_config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Lang {
    Pgn,
    Json,
}

/// Parse a PGN game collection or JSON config document and print any
/// diagnostics found.
#[derive(Debug, ClapParser)]
#[command(name = "pgncheck", version)]
struct Cli {
    /// File to parse. Reads from stdin if omitted.
    path: Option<PathBuf>,

    /// Which grammar to parse as. Guessed from the file extension if
    /// omitted (`.pgn` vs. anything else defaults to `.json`).
    #[arg(long, value_enum)]
    lang: Option<Lang>,

    /// Engine config file (this crate's own JSON dialect). Defaults are used
    /// if omitted; see `EngineConfig`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render diagnostics with ANSI color.
    #[arg(long)]
    color: bool,

    /// Exit non-zero on warnings as well as errors.
    #[arg(long)]
    strict: bool,

    /// Enable debug-level tracing output on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    let source = match &cli.path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("error: failed to read {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => {
            use std::io::Read;
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let engine_config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: failed to load {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };
    let strict = cli.strict || engine_config.recovery == RecoveryMode::Strict;

    let lang = cli.lang.unwrap_or_else(|| guess_lang(cli.path.as_deref()));
    let path_label = cli.path.as_ref().map(|p| p.display().to_string());

    let has_errors = match lang {
        Lang::Pgn => {
            let root = parse_pgn_with_config(&source, &engine_config);
            print_diagnostics(root.errors(), &source, path_label.as_deref(), cli.color);
            diagnostics_fail(root.errors(), strict)
        }
        Lang::Json => {
            let root = parse_json(&source);
            print_diagnostics(root.errors(), &source, path_label.as_deref(), cli.color);
            diagnostics_fail(root.errors(), strict)
        }
    };

    if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn guess_lang(path: Option<&std::path::Path>) -> Lang {
    match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some("pgn") => Lang::Pgn,
        _ => Lang::Json,
    }
}

fn print_diagnostics<K: pgn_syntax::diagnostics::DiagnosticKind>(
    errors: &[pgn_syntax::diagnostics::ErrorInfo<K>],
    source: &str,
    path: Option<&str>,
    color: bool,
) {
    if errors.is_empty() {
        return;
    }
    let mut printer = DiagnosticsPrinter::new(errors, source).colored(color);
    if let Some(path) = path {
        printer = printer.path(path);
    }
    eprintln!("{}", printer.render());
}

fn diagnostics_fail<K: pgn_syntax::diagnostics::DiagnosticKind>(
    errors: &[pgn_syntax::diagnostics::ErrorInfo<K>],
    strict: bool,
) -> bool {
    use pgn_syntax::diagnostics::Severity;
    errors
        .iter()
        .any(|e| e.severity() == Severity::Error || (strict && e.severity() == Severity::Warning))
}
