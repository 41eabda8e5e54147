//! Tokio runtime implementation.

use std::future::Future;
use std::io;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::TimedOut;

/// Captured result of a finished child process.
#[derive(Debug)]
pub(crate) struct ProcessOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: Option<String>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Run `command` through `sh -c`.
///
/// The child is killed if the returned future is dropped, which is what
/// happens when the caller's timeout fires.
pub(crate) async fn run_shell(command: &str, keep_stderr: bool) -> io::Result<ProcessOutput> {
    let stderr = if keep_stderr {
        Stdio::piped()
    } else {
        Stdio::null()
    };

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(stderr)
        .kill_on_drop(true)
        .spawn()?
        .wait_with_output()
        .await?;

    Ok(ProcessOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: keep_stderr.then(|| String::from_utf8_lossy(&output.stderr).into_owned()),
    })
}

/// Sleep for the specified duration using tokio.
pub async fn sleep_impl(duration: Duration) {
    tokio::time::sleep(duration).await
}

/// Run a future with a timeout using tokio.
pub async fn timeout_impl<F, T>(duration: Duration, future: F) -> Result<T, TimedOut>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| TimedOut)
}
