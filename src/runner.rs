//! Command execution against the gateway.
//!
//! A [`CommandRunner`] is the only place network fallibility enters the
//! crate: connectivity problems, timeouts and non-zero exits all come back
//! as a [`RunError`], never as a panic.

use std::future::Future;
use std::io;
use std::time::Duration;

use log::debug;

use crate::runtime;

/// How the runner should hand back the command's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The whole stdout as one string.
    Text,
    /// The output pre-split into lines.
    Lines,
}

/// Per-invocation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub timeout: Duration,
    pub capture: Capture,
    /// Discard stderr instead of folding it into the captured lines.
    pub suppress_errors: bool,
}

impl RunOptions {
    pub fn text(timeout: Duration) -> Self {
        RunOptions {
            timeout,
            capture: Capture::Text,
            suppress_errors: false,
        }
    }

    pub fn lines(timeout: Duration) -> Self {
        RunOptions {
            timeout,
            capture: Capture::Lines,
            suppress_errors: false,
        }
    }

    pub fn suppress_errors(mut self) -> Self {
        self.suppress_errors = true;
        self
    }
}

/// Output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput {
    Text(String),
    Lines(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to spawn command: {0}")]
    Spawn(io::Error),

    #[error("command timed out after {0:?}")]
    TimedOut(Duration),

    #[error("command exited with status {0:?}")]
    ExitStatus(Option<i32>),
}

/// Executes a command string with a bounded timeout.
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        command: &str,
        options: RunOptions,
    ) -> impl Future<Output = Result<RunOutput, RunError>> + Send;
}

/// Runs commands through the system shell.
///
/// The child process is killed once `options.timeout` expires.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, options: RunOptions) -> Result<RunOutput, RunError> {
        let keep_stderr = options.capture == Capture::Lines && !options.suppress_errors;
        let output = runtime::timeout(options.timeout, runtime::run_shell(command, keep_stderr))
            .await
            .map_err(|_| RunError::TimedOut(options.timeout))?
            .map_err(RunError::Spawn)?;

        if !output.success() {
            debug!("command exited with {:?}", output.status);
            return Err(RunError::ExitStatus(output.status));
        }

        Ok(match options.capture {
            Capture::Text => RunOutput::Text(output.stdout),
            Capture::Lines => {
                let mut lines: Vec<String> = output.stdout.lines().map(String::from).collect();
                if let Some(stderr) = output.stderr {
                    lines.extend(stderr.lines().map(String::from));
                }
                RunOutput::Lines(lines)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_capture() {
        let output = ShellRunner
            .run("printf 'hello\\nworld'", RunOptions::text(Duration::from_secs(2)))
            .await
            .unwrap();
        assert_eq!(output, RunOutput::Text("hello\nworld".to_string()));
    }

    #[tokio::test]
    async fn test_lines_capture_includes_stderr() {
        let output = ShellRunner
            .run(
                "echo out; echo err 1>&2",
                RunOptions::lines(Duration::from_secs(2)),
            )
            .await
            .unwrap();
        assert_eq!(
            output,
            RunOutput::Lines(vec!["out".to_string(), "err".to_string()])
        );
    }

    #[tokio::test]
    async fn test_lines_capture_suppresses_stderr() {
        let output = ShellRunner
            .run(
                "echo; echo err 1>&2",
                RunOptions::lines(Duration::from_secs(2)).suppress_errors(),
            )
            .await
            .unwrap();
        assert_eq!(output, RunOutput::Lines(vec![String::new()]));
    }

    #[tokio::test]
    async fn test_non_zero_exit_fails() {
        let err = ShellRunner
            .run("exit 3", RunOptions::text(Duration::from_secs(2)))
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::ExitStatus(Some(3))));
    }

    #[tokio::test]
    async fn test_timeout_kills_command() {
        let started = std::time::Instant::now();
        let err = ShellRunner
            .run("sleep 5", RunOptions::text(Duration::from_millis(100)))
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::TimedOut(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
