//! Shell executor - runs one command through the system interpreter
//!
//! On Windows the interpreter is PowerShell with the interactive execution
//! policy bypassed; everywhere else it is `sh -c`. The agent only observes
//! success or failure, never output, so all stdio is detached.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::core::{Config, Result, VigilError};

/// Executor for shell commands with a hard per-command timeout
pub struct ShellExecutor {
    /// Commands running longer than this are killed and counted as failed
    timeout: Duration,
}

impl ShellExecutor {
    /// Create an executor with an explicit timeout
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Create an executor from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_secs(config.command_timeout_secs))
    }

    /// Run one command to completion, blocking the loop until it exits
    pub async fn run(&self, command: &str) -> Result<()> {
        let mut child = Self::shell_command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VigilError::execute(format!("Failed to start shell: {}", e)))?;

        match timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(VigilError::execute(format!(
                "Shell exited with {}",
                status
            ))),
            Ok(Err(e)) => Err(VigilError::execute(format!(
                "Failed to wait for shell: {}",
                e
            ))),
            Err(_) => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                Err(VigilError::execute(format!(
                    "Timed out after {}s",
                    self.timeout.as_secs()
                )))
            }
        }
    }

    #[cfg(windows)]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-ExecutionPolicy", "Bypass", "-Command", command]);
        cmd
    }

    #[cfg(not(windows))]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> ShellExecutor {
        ShellExecutor::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_successful_command() {
        assert!(executor().run("exit 0").await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_command_reports_execute_error() {
        let err = executor().run("exit 3").await.unwrap_err();
        assert!(matches!(err, VigilError::Execute(_)));
    }

    #[tokio::test]
    async fn test_unknown_command_reports_execute_error() {
        let err = executor()
            .run("definitely-not-a-real-command-xyz")
            .await
            .unwrap_err();
        assert!(matches!(err, VigilError::Execute(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout_kills_command() {
        let executor = ShellExecutor::new(Duration::from_millis(100));
        let err = executor.run("sleep 30").await.unwrap_err();
        assert!(matches!(err, VigilError::Execute(_)));
    }
}
