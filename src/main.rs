use clap::{Parser, Subcommand};

mod cli;
mod core;
mod error;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "repo-tool")]
#[command(about = "Personal shortcuts for git chores and YouTube searches")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortcuts for everyday git workflows
    #[command(visible_alias = "g")]
    Git(cli::git::GitArgs),

    /// Open YouTube or YouTube Music in the default browser
    #[command(visible_alias = "y")]
    Youtube(cli::youtube::YoutubeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose).map_err(error::RepoToolError::Internal)?;

    match cli.command {
        Commands::Git(args) => cli::git::execute(args).await,
        Commands::Youtube(args) => cli::youtube::execute(args).await,
    }
}
