//! Command Line Interface module
//!
//! One submodule per command group:
//! - `git`: repository shortcuts (init, commit-all-and-push)
//! - `youtube`: open a YouTube or YouTube Music search in the browser

pub mod git;
pub mod youtube;
