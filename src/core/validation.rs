use regex::Regex;
use std::sync::OnceLock;

/// Pattern accepted for a remote origin: GitHub over HTTPS or SSH, with an
/// optional `.git` suffix.
const GITHUB_REMOTE_PATTERN: &str =
    r"^((https?://)|(git@))github\.com[/:]([\w.-]+)/([\w.-]+?)(\.git)?$";

fn github_remote_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(GITHUB_REMOTE_PATTERN).expect("valid github remote pattern")
    })
}

/// Returns true when `origin` looks like a GitHub HTTPS or SSH remote URL.
pub fn is_github_remote(origin: &str) -> bool {
    github_remote_regex().is_match(origin)
}
