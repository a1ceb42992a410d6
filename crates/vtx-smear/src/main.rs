use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    list::{self, ListArgs},
    select::{self, SelectArgs},
    show::{self, ShowArgs},
    validate::{self, ValidateArgs},
    version::{self, VersionArgs},
};
use log::LevelFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "vtx-smear", about = "Vertex smearing parameter catalog CLI")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the scenarios in the catalog.
    List(ListArgs),
    /// Print a single parameter set.
    Show(ShowArgs),
    /// Merge a scenario with the common binding and emit the export document.
    Select(SelectArgs),
    /// Check a user catalog or a previously exported document.
    Validate(ValidateArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::List(args) => list::run(&args),
        Command::Show(args) => show::run(&args),
        Command::Select(args) => select::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}
