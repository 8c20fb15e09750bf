use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Binary name shown in usage hints
pub const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "EASYSERVICE_CONFIG";

/// System-wide config file, read when present
pub const SYSTEM_CONFIG_PATH: &str = "/etc/easyservice/easyservice.toml";

const SYSTEM_UNIT_DIR: &str = "/etc/systemd/system";

/// Tool configuration. Every field is optional in the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where unit files are written; derived from `user_mode` when unset
    pub unit_dir: Option<PathBuf>,
    /// systemctl executable; looked up on PATH when unset
    pub systemctl: Option<PathBuf>,
    /// Directory relative `--file` paths resolve against; defaults to the
    /// directory of the running binary
    pub base_dir: Option<PathBuf>,
    pub default_user: String,
    pub require_root: bool,
    /// Manage per-user units (`systemctl --user`)
    pub user_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_dir: None,
            systemctl: None,
            base_dir: None,
            default_user: "root".into(),
            require_root: true,
            user_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from the first source that exists:
    /// explicit path, `EASYSERVICE_CONFIG`, the system-wide file, defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        let system = Path::new(SYSTEM_CONFIG_PATH);
        if system.exists() {
            return Self::from_file(system);
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Using config from: {}", path.display());
        Ok(cfg)
    }

    pub fn unit_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.unit_dir {
            return Ok(dir.clone());
        }
        if self.user_mode {
            let config_dir = dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
            Ok(config_dir.join("systemd").join("user"))
        } else {
            Ok(PathBuf::from(SYSTEM_UNIT_DIR))
        }
    }

    pub fn systemctl(&self) -> PathBuf {
        match &self.systemctl {
            Some(path) => path.clone(),
            None => which::which("systemctl").unwrap_or_else(|e| {
                log::debug!("systemctl not found on PATH ({e}), relying on exec lookup");
                PathBuf::from("systemctl")
            }),
        }
    }

    pub fn base_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe().context("Failed to locate running binary")?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow::anyhow!("Running binary has no parent directory"))
    }
}
