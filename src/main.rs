use clap::Parser;
use shred::cli::shred_paths;
use shred::Shredder;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("SHRED_PROFILE");
const GIT_HASH: &str = env!("SHRED_GIT_HASH");
const TARGET: &str = env!("SHRED_TARGET");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {}, {})", VERSION, PROFILE, GIT_HASH, TARGET))
}

#[derive(Parser)]
#[command(name = "shred")]
#[command(about = "Overwrite files with random data, then delete them", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log each pass to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Files to shred, processed in order
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("shred {}", get_version());
        return ExitCode::SUCCESS;
    }

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if cli.files.is_empty() {
        eprintln!("Usage: shred <file1> [file2 ...]");
        return ExitCode::FAILURE;
    }

    let mut shredder = Shredder::new();
    let summary = shred_paths(
        &mut shredder,
        cli.files.as_slice(),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
