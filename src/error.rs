//! Error taxonomy for service operations
//!
//! Every failure the tool can report falls into one of three groups:
//! usage errors (bad flag combinations), precondition errors (the host is
//! not in a state that allows the operation) and delegated-operation errors
//! (the filesystem or systemctl refused).

use std::path::PathBuf;

use thiserror::Error;

use crate::descriptor::ServiceType;

/// Exit code for usage errors, matches clap's own usage exit code
pub const EXIT_USAGE: i32 = 2;
/// Exit code for every other failure
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("You need to set ONE of the Exec arguments. Type \"{bin} create -h\" for more information")]
    ExecSpec { bin: String },

    #[error("Wrong type! Allowed types are: {}", ServiceType::allowed())]
    InvalidType,

    #[error("Service name must not be empty")]
    EmptyName,

    #[error("Invalid service name {0:?}: must not contain '/', control characters or be '.'/'..'")]
    InvalidName(String),

    #[error("The {0} must be a single line")]
    MultiLine(&'static str),

    #[error("You need to be root to run this command")]
    NotRoot,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Service already exists! Use -o to overwrite it")]
    AlreadyExists,

    #[error("Service \"{0}\" does not exist")]
    NotFound(String),

    #[error("Aborted")]
    Declined,

    #[error("Confirmation prompt failed: {0}")]
    Prompt(String),

    #[error("Error creating service: {0}")]
    Create(String),

    #[error("Error removing service: {0}")]
    Remove(String),

    #[error("Error reloading systemd daemon: {0}")]
    Reload(String),

    #[error("Error starting service: {0}")]
    Start(String),

    #[error("Error enabling service: {0}")]
    Enable(String),

    #[error("Error stopping service: {0}")]
    Stop(String),

    #[error("Error disabling service: {0}")]
    Disable(String),

    #[error("Error querying service state: {0}")]
    Status(String),

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl ServiceError {
    /// Usage errors are fixable by changing the command line
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ServiceError::ExecSpec { .. }
                | ServiceError::InvalidType
                | ServiceError::EmptyName
                | ServiceError::InvalidName(_)
                | ServiceError::MultiLine(_)
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() { EXIT_USAGE } else { EXIT_FAILURE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_map_to_exit_two() {
        assert_eq!(ServiceError::InvalidType.exit_code(), EXIT_USAGE);
        assert_eq!(
            ServiceError::ExecSpec { bin: "easyservice".into() }.exit_code(),
            EXIT_USAGE
        );
        assert_eq!(ServiceError::InvalidName("../x".into()).exit_code(), EXIT_USAGE);
        assert_eq!(ServiceError::MultiLine("description").exit_code(), EXIT_USAGE);
        assert_eq!(ServiceError::AlreadyExists.exit_code(), EXIT_FAILURE);
        assert_eq!(ServiceError::Output("broken pipe".into()).exit_code(), EXIT_FAILURE);
        assert_eq!(ServiceError::Reload("boom".into()).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn invalid_type_lists_allowed_values() {
        assert_eq!(
            ServiceError::InvalidType.to_string(),
            "Wrong type! Allowed types are: simple, exec, dbus, notify, forking, oneshot"
        );
    }
}
