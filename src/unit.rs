//! Systemd unit file generation and management.
//!
//! Renders a [`ServiceDescriptor`] into unit-file text and stores it in the
//! configured unit directory.

mod file_ops;

use std::fs;
use std::path::PathBuf;

use crate::descriptor::{ServiceDescriptor, unit_file_name};
use crate::error::ServiceError;

use file_ops::write_file_atomic;

/// Unit files in one directory (`/etc/systemd/system` or the per-user one)
#[derive(Debug, Clone)]
pub struct UnitStore {
    dir: PathBuf,
    user_mode: bool,
}

impl UnitStore {
    pub fn new(dir: impl Into<PathBuf>, user_mode: bool) -> Self {
        Self {
            dir: dir.into(),
            user_mode,
        }
    }

    pub fn user_mode(&self) -> bool {
        self.user_mode
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(unit_file_name(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    /// Render the unit and write it atomically, returning its path
    pub fn write(&self, desc: &ServiceDescriptor) -> Result<PathBuf, ServiceError> {
        let unit_path = self.path_for(&desc.name);
        let content = render(desc, self.user_mode);

        fs::create_dir_all(&self.dir).map_err(|e| {
            ServiceError::Create(format!("Failed to create unit directory: {e}"))
        })?;

        write_file_atomic(&unit_path, &content)?;
        log::info!("Wrote unit file {}", unit_path.display());
        Ok(unit_path)
    }

    pub fn remove(&self, name: &str) -> Result<PathBuf, ServiceError> {
        let unit_path = self.path_for(name);
        fs::remove_file(&unit_path)
            .map_err(|e| ServiceError::Remove(format!("Failed to remove unit file: {e}")))?;
        log::info!("Removed unit file {}", unit_path.display());
        Ok(unit_path)
    }
}

/// Generate unit file content
pub fn render(desc: &ServiceDescriptor, user_mode: bool) -> String {
    let mut content = String::with_capacity(512);

    content.push_str("[Unit]\n");
    content.push_str(&format!("Description={}\n", desc.description));
    content.push_str("After=network.target\n");
    content.push('\n');

    content.push_str("[Service]\n");
    content.push_str(&format!("Type={}\n", desc.service_type));
    // systemd --user refuses to switch users
    if !user_mode {
        content.push_str(&format!("User={}\n", desc.user));
        if let Some(group) = &desc.group {
            content.push_str(&format!("Group={group}\n"));
        }
    }
    content.push_str(&format!("ExecStart={}\n", desc.exec.exec_start()));
    content.push_str("Restart=always\n");
    content.push_str("RestartSec=3\n");
    content.push('\n');

    content.push_str("[Install]\n");
    if user_mode {
        content.push_str("WantedBy=default.target\n");
    } else {
        content.push_str("WantedBy=multi-user.target\n");
    }

    content
}
