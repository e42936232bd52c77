//! posync - copy gettext translations between PO catalog trees.
//!
//! Usage:
//!   posync cp <srcDir> <destDir>        Copy translations by message identity
//!   posync orphans <srcDir> <destDir>   List translations with no destination
//!   posync --help                       Show help

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use posync_scan::{CatalogIndex, IndexBuilder, ScanConfig};
use posync_sync::{OrphanDetector, SyncEngine};

const USAGE: &str = "\
posync is a tool for managing gettext *.po files.

Usage:
    posync <command> <srcDir> <destDir>

Commands:
    cp          copy msgstrs
    orphans     show orphans msgstrs
";

#[derive(Parser)]
#[command(name = "posync", override_help = USAGE)]
struct Cli {
    /// Command to run
    command: Command,

    /// Tree holding the translations to read
    src_dir: PathBuf,

    /// Tree holding the catalogs to match against
    dest_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Command {
    /// Copy msgstrs from source into destination catalogs
    Cp,
    /// Show translated source messages missing from the destination
    Orphans,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Self::Cp => "cp",
            Self::Orphans => "orphans",
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => {
                err.print()?;
                return Ok(ExitCode::SUCCESS);
            }
            _ => {
                print!("{USAGE}");
                return Ok(ExitCode::FAILURE);
            }
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Log to stderr so diagnostics on stdout stay clean. Filter with `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run one command against the two trees.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "command:posync {}\tsrcDir:{}\tdestDir:{}",
        cli.command.name(),
        cli.src_dir.display(),
        cli.dest_dir.display()
    )?;

    let index = build_index(&cli.dest_dir)?;
    let source = ScanConfig::new(&cli.src_dir);

    match cli.command {
        Command::Cp => {
            SyncEngine::new().run(&source, &index, out)?;
        }
        Command::Orphans => {
            OrphanDetector::new().run(&source, &index, out)?;
        }
    }

    Ok(())
}

/// Index every identity defined under the destination tree.
fn build_index(dest_dir: &Path) -> Result<CatalogIndex> {
    Ok(IndexBuilder::new().build(&ScanConfig::new(dest_dir))?)
}
