use clap::{Args, Subcommand};
use tracing::info;

use crate::core::git::GitActions;
use crate::core::process::SystemRunner;
use crate::error::Result;

#[derive(Args)]
pub struct GitArgs {
    #[command(subcommand)]
    command: GitCommand,
}

#[derive(Subcommand)]
enum GitCommand {
    /// Stage, commit and push every change in the current repository
    #[command(visible_alias = "c")]
    Commit {
        /// The commit message; a default phrase is used when blank
        #[arg(short, long, default_value = "")]
        message: String,
    },

    /// Initialize a repository in the current folder and link it to a remote
    #[command(visible_alias = "i")]
    Init {
        /// The GitHub remote URL to register as origin
        #[arg(short, long)]
        origin: String,
    },
}

pub async fn execute(args: GitArgs) -> Result<()> {
    let actions = GitActions::new(SystemRunner);

    match args.command {
        GitCommand::Commit { message } => commit(&actions, &message).await,
        GitCommand::Init { origin } => init(&actions, &origin).await,
    }
}

async fn commit(actions: &GitActions<SystemRunner>, message: &str) -> Result<()> {
    // refuse to run outside a repository, surfacing the status output
    actions.status().await?;

    let committed = actions.commit_all(message).await?;
    if !committed.combined.is_empty() {
        print!("{}", committed.combined);
    }

    let pushed = actions.push().await?;
    if !pushed.combined.is_empty() {
        print!("{}", pushed.combined);
    }

    info!("changes committed and pushed");
    Ok(())
}

async fn init(actions: &GitActions<SystemRunner>, origin: &str) -> Result<()> {
    actions.init(origin).await?;

    println!("🎉 The current folder is now a repository tracking {origin}");
    Ok(())
}
