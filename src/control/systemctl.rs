//! Service control through the systemctl executable

use std::path::PathBuf;
use std::process::{Command, Output};

use crate::error::ServiceError;

use super::ServiceControl;

#[derive(Debug, Clone)]
pub struct Systemctl {
    bin: PathBuf,
    user_mode: bool,
}

impl Systemctl {
    pub fn new(bin: impl Into<PathBuf>, user_mode: bool) -> Self {
        Self {
            bin: bin.into(),
            user_mode,
        }
    }

    /// Run `systemctl [--user] <args>` and collect its output
    fn run(&self, args: &[&str]) -> Result<Output, String> {
        let mut cmd = Command::new(&self.bin);
        if self.user_mode {
            cmd.arg("--user");
        }
        cmd.args(args);
        log::debug!("Running {cmd:?}");

        cmd.output()
            .map_err(|e| format!("Failed to execute {} {}: {e}", self.bin.display(), args[0]))
    }

    /// Run a command that must exit successfully
    fn run_checked(&self, args: &[&str]) -> Result<(), String> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                format!("systemctl {} exited with {}", args[0], output.status)
            } else {
                stderr.to_string()
            });
        }
        Ok(())
    }
}

impl ServiceControl for Systemctl {
    fn daemon_reload(&mut self) -> Result<(), ServiceError> {
        self.run_checked(&["daemon-reload"])
            .map_err(ServiceError::Reload)
    }

    fn start(&mut self, unit: &str) -> Result<(), ServiceError> {
        self.run_checked(&["start", unit]).map_err(ServiceError::Start)
    }

    fn stop(&mut self, unit: &str) -> Result<(), ServiceError> {
        self.run_checked(&["stop", unit]).map_err(ServiceError::Stop)
    }

    fn enable(&mut self, unit: &str) -> Result<(), ServiceError> {
        self.run_checked(&["enable", unit]).map_err(ServiceError::Enable)
    }

    fn disable(&mut self, unit: &str) -> Result<(), ServiceError> {
        self.run_checked(&["disable", unit])
            .map_err(ServiceError::Disable)
    }

    fn is_active(&mut self, unit: &str) -> Result<bool, ServiceError> {
        // systemctl is-active returns:
        // - Exit 0 if active
        // - Exit 3 if inactive
        // - Other codes for other states
        let output = self
            .run(&["is-active", "--quiet", unit])
            .map_err(ServiceError::Status)?;
        Ok(output.status.success())
    }
}
