use tracing::info;

use crate::core::process::ProcessRunner;
use crate::error::{LaunchError, Result};

const YOUTUBE_ENDPOINT: &str = "https://www.youtube.com/";
const YOUTUBE_MUSIC_ENDPOINT: &str = "https://music.youtube.com/";

/// Assembles the search URL for the chosen frontend.
///
/// Without terms the bare endpoint is returned. YouTube proper takes the
/// terms joined with spaces under `results?search_query=`; the music
/// frontend joins with `+` under `search?q=`.
pub fn build_search_url(terms: &[String], music: bool) -> String {
    let endpoint = if music {
        YOUTUBE_MUSIC_ENDPOINT
    } else {
        YOUTUBE_ENDPOINT
    };

    if terms.is_empty() {
        return endpoint.to_string();
    }

    if music {
        format!("{endpoint}search?q={}", terms.join("+"))
    } else {
        format!("{endpoint}results?search_query={}", terms.join(" "))
    }
}

#[cfg(target_os = "macos")]
const LAUNCHER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const LAUNCHER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const LAUNCHER: (&str, &[&str]) = ("xdg-open", &[]);

/// Hands `url` to the platform's default-application launcher.
pub async fn launch<R: ProcessRunner>(runner: &R, url: &str) -> Result<()> {
    info!("opening {url}");

    let (program, fixed_args) = LAUNCHER;
    let mut args: Vec<&str> = fixed_args.to_vec();
    args.push(url);

    let output = runner
        .run(program, &args)
        .await
        .map_err(|err| LaunchError::Failed {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    if output.success {
        Ok(())
    } else {
        Err(LaunchError::Failed {
            url: url.to_string(),
            reason: output.combined,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::process::testing::FakeRunner;
    use crate::error::RepoToolError;

    fn terms(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn standard_search_joins_terms_with_spaces() {
        let url = build_search_url(&terms(&["lo-fi", "beats"]), false);

        assert_eq!(url, "https://www.youtube.com/results?search_query=lo-fi beats");
    }

    #[test]
    fn music_search_joins_terms_with_plus_signs() {
        let url = build_search_url(&terms(&["lo-fi", "beats"]), true);

        assert_eq!(url, "https://music.youtube.com/search?q=lo-fi+beats");
    }

    #[test]
    fn no_terms_returns_the_bare_endpoint() {
        assert_eq!(build_search_url(&[], false), "https://www.youtube.com/");
        assert_eq!(build_search_url(&[], true), "https://music.youtube.com/");
    }

    #[tokio::test]
    async fn launch_hands_the_url_to_the_system_opener() {
        let runner = FakeRunner::new();

        launch(&runner, "https://www.youtube.com/").await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].last().unwrap(), "https://www.youtube.com/");
    }

    #[tokio::test]
    async fn launch_surfaces_opener_failures() {
        let runner = FakeRunner::new();
        runner.push_response("no handler registered", false);

        let err = launch(&runner, "https://www.youtube.com/")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RepoToolError::Launch(LaunchError::Failed { .. })
        ));
    }
}
