use tracing::{debug, info};

use crate::core::process::{ProcessOutput, ProcessRunner};
use crate::core::staging::StagingPlan;
use crate::core::validation::is_github_remote;
use crate::error::{PreconditionError, ProcessError, Result};

/// Commit message used when the caller provides a blank one.
pub const DEFAULT_COMMIT_MESSAGE: &str = "added all changes";

const DEFAULT_BRANCH: &str = "main";

/// Git workflows composed from sequential subprocess invocations.
///
/// Every step goes through the injected [`ProcessRunner`]. The first failing
/// step aborts the whole operation and is surfaced wrapped with step
/// context; partially completed steps are not rolled back.
pub struct GitActions<R> {
    runner: R,
}

impl<R: ProcessRunner> GitActions<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn git(&self, args: &[&str]) -> Result<ProcessOutput> {
        Ok(self.runner.run("git", args).await?)
    }

    /// Runs one git step, turning a non-zero exit into a contextual error
    /// carrying the combined output.
    async fn step(&self, args: &[&str], context: &str) -> Result<ProcessOutput> {
        let output = self.git(args).await?;
        if output.success {
            Ok(output)
        } else {
            Err(ProcessError::Failed {
                context: context.to_string(),
                output: output.combined,
            }
            .into())
        }
    }

    /// Runs `git status`, succeeding only inside an existing repository.
    pub async fn status(&self) -> Result<ProcessOutput> {
        self.step(&["status"], "the current directory is not a repository")
            .await
    }

    async fn is_repository(&self) -> Result<bool> {
        Ok(self.git(&["status"]).await?.success)
    }

    /// Turns the current folder into a repository linked to `origin`.
    ///
    /// The origin is validated before any subprocess is spawned; an existing
    /// repository is refused before any mutating step runs.
    pub async fn init(&self, origin: &str) -> Result<()> {
        let origin = origin.trim();
        if origin.is_empty() {
            return Err(PreconditionError::OriginRequired.into());
        }
        if !is_github_remote(origin) {
            return Err(PreconditionError::InvalidOrigin {
                origin: origin.to_string(),
            }
            .into());
        }
        if self.is_repository().await? {
            return Err(PreconditionError::AlreadyRepository.into());
        }

        self.step(&["init", "."], "unable to initialize the repository")
            .await?;
        self.step(
            &["remote", "add", "origin", origin],
            "unable to add the origin",
        )
        .await?;
        // TODO: make the default branch name configurable
        self.step(
            &["branch", "-M", DEFAULT_BRANCH],
            "unable to set the main branch",
        )
        .await?;
        self.step(
            &["push", "-u", "origin", DEFAULT_BRANCH],
            "unable to push the main branch",
        )
        .await?;

        Ok(())
    }

    /// Stages every untracked path and commits all changes with `message`,
    /// falling back to [`DEFAULT_COMMIT_MESSAGE`] when it is blank.
    pub async fn commit_all(&self, message: &str) -> Result<ProcessOutput> {
        let message = if message.trim().is_empty() {
            DEFAULT_COMMIT_MESSAGE
        } else {
            message
        };

        self.stage_untracked().await?;

        info!("committing with message: {message}");
        self.step(&["commit", "-am", message], "unable to commit the changes")
            .await
    }

    /// Registers untracked paths with one `git add`, collapsing nested
    /// files to their top-level folder.
    async fn stage_untracked(&self) -> Result<()> {
        let listing = self
            .step(
                &["ls-files", "--others", "--exclude-standard"],
                "unable to list the untracked files",
            )
            .await?;

        let plan = StagingPlan::from_listing(&listing.combined);
        if plan.is_empty() {
            debug!("no untracked paths to stage");
            return Ok(());
        }

        let paths = plan.paths();
        debug!("staging {} untracked path(s): {}", paths.len(), paths.join(" "));

        let mut args = vec!["add".to_string()];
        args.extend(paths);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.step(&args, "unable to stage the untracked files").await?;

        Ok(())
    }

    pub async fn push(&self) -> Result<ProcessOutput> {
        self.step(&["push"], "unable to push to the remote").await
    }
}
