// ABOUTME: Subprocess runner used by the CLI-backed providers
// ABOUTME: Captures stdout, enforces a timeout, and maps failures to SourceError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybrief Contributors

use daybrief_core::constants::defaults::COMMAND_TIMEOUT_SECS;
use daybrief_core::errors::{SourceError, SourceResult};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Longest stderr excerpt carried into a warning
const MAX_STDERR_CHARS: usize = 200;

/// Runs external commands with a per-invocation timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRunner {
    timeout: Duration,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(COMMAND_TIMEOUT_SECS))
    }
}

impl CommandRunner {
    /// Runner with the given timeout
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run `program` with `args` and return its stdout.
    ///
    /// The child is killed when the timeout elapses.
    ///
    /// # Errors
    ///
    /// - `Unavailable` when the process cannot be spawned
    /// - `Timeout` when it does not finish in time
    /// - `NonZeroExit` when it exits unsuccessfully
    pub async fn run<S: AsRef<str> + Sync>(
        &self,
        provider: &str,
        program: &str,
        args: &[S],
    ) -> SourceResult<Vec<u8>> {
        let mut command = Command::new(program);
        command
            .args(args.iter().map(AsRef::as_ref))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!(provider, program, timeout_secs = self.timeout.as_secs(), "Running source command");

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(error)) => {
                return Err(SourceError::unavailable(
                    provider,
                    format!("failed to run {program}: {error}"),
                ))
            }
            Err(_) => {
                return Err(SourceError::Timeout {
                    provider: provider.to_owned(),
                    timeout: self.timeout,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::NonZeroExit {
                provider: provider.to_owned(),
                status: output.status.to_string(),
                stderr: stderr.trim().chars().take(MAX_STDERR_CHARS).collect(),
            });
        }

        debug!(provider, bytes = output.stdout.len(), "Source command finished");
        Ok(output.stdout)
    }
}
