use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

use cli::compare::CompareCommand;
use cli::interactive::InteractiveCommand;
use cli::single::SingleCommand;
use cli::OutputOptions;

#[derive(Parser)]
#[command(name = "hexalign")]
#[command(about = "Show numbers as hex digits in indexed columns and highlight the columns where they agree", long_about = None)]
struct Cli {
    #[command(flatten)]
    output: OutputOptions,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for a mode and numbers (default)
    Interactive(InteractiveCommand),
    /// Show one number in indexed columns
    Single(SingleCommand),
    /// Compare numbers column by column
    Compare(CompareCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let renderer = cli.output.renderer();

    match cli.command {
        None => InteractiveCommand::default().execute(&renderer),
        Some(Commands::Interactive(cmd)) => cmd.execute(&renderer),
        Some(Commands::Single(cmd)) => cmd.execute(&renderer),
        Some(Commands::Compare(cmd)) => cmd.execute(&renderer),
    }
}
