//! Daemon control - delegates to the service manager
//!
//! [`ServiceControl`] is the seam between the command workflows and
//! systemd; [`Systemctl`] is the production implementation.

mod systemctl;

pub use systemctl::Systemctl;

use crate::error::ServiceError;

/// Operations on the service manager. `unit` is a full unit file name
/// such as `myapp.service`.
pub trait ServiceControl {
    /// Make the manager re-read unit files from disk
    fn daemon_reload(&mut self) -> Result<(), ServiceError>;

    fn start(&mut self, unit: &str) -> Result<(), ServiceError>;

    fn stop(&mut self, unit: &str) -> Result<(), ServiceError>;

    /// Start the unit automatically at boot
    fn enable(&mut self, unit: &str) -> Result<(), ServiceError>;

    fn disable(&mut self, unit: &str) -> Result<(), ServiceError>;

    /// Returns: Ok(true) if the unit is active, Ok(false) otherwise
    fn is_active(&mut self, unit: &str) -> Result<bool, ServiceError>;
}
