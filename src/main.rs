use anyhow::Result;
use clap::Parser;
use pydupes_rs::analyzer::DuplicateChecker;
use pydupes_rs::discovery::DiscoveryOptions;
use pydupes_rs::report::{set_color, write_report, ReportOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser)]
#[command(author, version, about = "Find functions defined more than once in the same Python file", long_about = None)]
struct Cli {
    /// Folder (or single file) to scan.
    path: PathBuf,

    /// File extensions to scan, without the dot. Repeatable.
    #[arg(long = "ext", value_name = "EXT", default_value = "py")]
    extensions: Vec<String>,

    /// Extra directory names to skip, on top of .git, node_modules,
    /// __pycache__, .venv and venv. Repeatable.
    #[arg(long, value_name = "DIR")]
    exclude: Vec<String>,

    /// Print the first lines of every duplicate definition.
    #[arg(long)]
    show_snippets: bool,

    /// Exit with status 1 when any duplicate is found.
    #[arg(long)]
    fail_on_duplicates: bool,

    /// Output raw JSON.
    /// This is useful for integrating with other tools or CI/CD pipelines.
    #[arg(long)]
    json: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Log each scanned file to stderr. Overridden by RUST_LOG.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    set_color(!cli.no_color);

    let discovery = DiscoveryOptions {
        extensions: cli.extensions,
        ..DiscoveryOptions::default()
    }
    .with_extra_excludes(cli.exclude);

    let checker = DuplicateChecker::new(discovery);
    let result = checker.analyze(&cli.path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        let options = ReportOptions {
            show_snippets: cli.show_snippets,
        };
        write_report(&mut out, &result, &options)?;
    }
    out.flush()?;

    if result.exit_failure(cli.fail_on_duplicates) {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
