use std::time::Duration;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

use mediashelf_config::Settings;

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

/// Runs the external metadata-inspection command against a file path.
///
/// The path is passed as a single argument vector entry, never through a
/// shell, and the command's execution time is bounded by the configured
/// timeout.
#[derive(Debug, Clone)]
pub struct MediaInspector {
    command: String,
    timeout: Duration,
}

impl MediaInspector {
    #[must_use]
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.mediainfo_command.clone(),
            Duration::from_secs(settings.mediainfo_timeout_secs),
        )
    }

    /// Returns the command's combined stdout/stderr text, regardless of its
    /// exit status; a failing command's partial output is still returned.
    /// Non-UTF-8 output is carried lossily.
    ///
    /// # Errors
    ///
    /// Returns [`InspectError::Spawn`] when the command cannot be started
    /// and [`InspectError::Timeout`] when it outlives the configured bound.
    pub async fn inspect(&self, path: &str) -> Result<String, InspectError> {
        debug!(command = %self.command, path, "running metadata inspection");

        let output = Command::new(&self.command)
            .arg(path)
            .kill_on_drop(true)
            .output();

        let output = match time::timeout(self.timeout, output).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(InspectError::Spawn {
                    command: self.command.clone(),
                    source,
                });
            }
            Err(_) => {
                return Err(InspectError::Timeout {
                    command: self.command.clone(),
                    timeout: self.timeout,
                });
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
