use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::ProcessError;

/// Outcome of a finished external process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Captured stdout followed by stderr, lossily decoded.
    pub combined: String,
    pub success: bool,
}

/// Capability to run an external process to completion.
///
/// All real work in this tool happens in subprocesses; routing every spawn
/// through this trait lets the workflows be exercised with a recording fake.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput, ProcessError>;
}

/// Runner backed by [`tokio::process::Command`].
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput, ProcessError> {
        debug!("running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ProcessOutput {
            combined,
            success: output.status.success(),
        })
    }
}
