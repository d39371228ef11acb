use clap::{ArgAction, Parser};
use log::LevelFilter;
use mkdb::error::Error;
use mkdb::init::{self, InitStats, PAGE_SIZE};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "mkdb")]
#[command(version)]
#[command(about = "Create a zero-filled placeholder database file")]
#[command(after_help = "EXAMPLES:\n  \
  mkdb test.db                    Create test.db (32768 zero bytes)\n  \
  mkdb -n test.db                 Show what would be created\n  \
  mkdb -v --stats data/pages.db   Create with logging and statistics")]
struct Args {
    /// Database file to create or truncate
    path: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "dry-run",
        help = "Dry run - show what would be created"
    )]
    dry_run: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Explain what is being done (repeat for more detail)"
    )]
    verbose: u8,

    #[arg(long = "stats", help = "Show detailed statistics")]
    stats: bool,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("mkdb: {}", e);
        process::exit(e.exit_code());
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(args: Args) -> Result<(), Error> {
    let path = args.path.as_deref().ok_or(Error::Usage)?;

    if args.dry_run {
        let planned = init::plan(path);
        println!(
            "would create '{}' ({} bytes, {} pages)",
            path.display(),
            planned.bytes_written,
            planned.pages
        );
        return Ok(());
    }

    let stats = init::initialize(path)?;
    println!("ran {}", path.display());

    if args.stats {
        print_summary(&stats);
    }

    Ok(())
}

fn print_summary(stats: &InitStats) {
    println!("\nStatistics:");
    println!("  File:   {}", stats.path.display());
    println!("  Bytes:  {}", stats.bytes_written);
    println!("  Pages:  {} x {}", stats.pages, PAGE_SIZE);
    println!("  Time:   {:.2?}", stats.elapsed);
}
