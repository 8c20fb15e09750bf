//! Service descriptor handed from the validator to the unit builder

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ServiceError;

/// systemd `Type=` of the generated service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Simple,
    Exec,
    Dbus,
    Notify,
    Forking,
    Oneshot,
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Simple,
        ServiceType::Exec,
        ServiceType::Dbus,
        ServiceType::Notify,
        ServiceType::Forking,
        ServiceType::Oneshot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::Simple => "simple",
            ServiceType::Exec => "exec",
            ServiceType::Dbus => "dbus",
            ServiceType::Notify => "notify",
            ServiceType::Forking => "forking",
            ServiceType::Oneshot => "oneshot",
        }
    }

    /// Comma separated list used in error messages
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(ServiceError::InvalidType)
    }
}

/// What `ExecStart=` runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecSpec {
    /// Resolved, existing executable
    File(PathBuf),
    /// Literal command line, passed through untouched
    Command(String),
}

impl ExecSpec {
    pub fn exec_start(&self) -> String {
        match self {
            ExecSpec::File(path) => path.display().to_string(),
            ExecSpec::Command(cmd) => cmd.clone(),
        }
    }
}

/// Validated description of one service unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub description: String,
    pub user: String,
    pub group: Option<String>,
    pub service_type: ServiceType,
    pub exec: ExecSpec,
}

impl ServiceDescriptor {
    /// Unit file name derived from the service name
    pub fn unit_file_name(&self) -> String {
        unit_file_name(&self.name)
    }
}

/// `<name>.service`, unless the name already carries the suffix
pub fn unit_file_name(name: &str) -> String {
    if name.ends_with(".service") {
        name.to_string()
    } else {
        format!("{name}.service")
    }
}

/// A service name must map to a single file inside the unit directory
pub fn check_name(name: &str) -> Result<(), ServiceError> {
    if name.is_empty() {
        return Err(ServiceError::EmptyName);
    }
    if name == "." || name == ".." || name.contains('/') || name.chars().any(char::is_control) {
        return Err(ServiceError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Description used when `--description` is not given
pub fn default_description(name: &str) -> String {
    format!("An easy service for {name}")
}
