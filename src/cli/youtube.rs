use clap::Args;
use tracing::debug;

use crate::core::process::SystemRunner;
use crate::core::youtube::{build_search_url, launch};
use crate::error::Result;

#[derive(Args)]
pub struct YoutubeArgs {
    /// Search terms; opens the frontend's home page when omitted
    #[arg(value_name = "TERMS")]
    terms: Vec<String>,

    /// Open YouTube Music instead
    #[arg(short, long)]
    music: bool,
}

pub async fn execute(args: YoutubeArgs) -> Result<()> {
    let url = build_search_url(&args.terms, args.music);
    debug!("assembled search URL: {url}");

    launch(&SystemRunner, &url).await
}
