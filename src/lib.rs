//! easyservice: create and manage systemd service units
//!
//! The binary is a thin wrapper around [`run`]; the workflows in
//! [`commands`] take their collaborators (unit directory, service manager,
//! confirmation prompt, output) explicitly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod control;
pub mod descriptor;
pub mod error;
pub mod privileges;
pub mod prompt;
pub mod unit;
pub mod validate;

use std::io;

use anyhow::Result;

use cli::{Args, Cmd};
use commands::Context;
use config::Config;
use control::Systemctl;
use unit::UnitStore;

/// Execute one parsed command line and return the process exit code.
///
/// Errors are returned for the caller to print; a [`error::ServiceError`]
/// inside the chain carries its own exit code.
pub fn run(args: Args) -> Result<i32> {
    let cfg = Config::load(args.config.as_deref())?;
    log::debug!("Effective config: {cfg:?}");

    let mut control = Systemctl::new(cfg.systemctl(), cfg.user_mode);
    let mut confirmer = prompt::stdin_confirmer();
    let mut stdout = io::stdout();

    let mut ctx = Context {
        store: UnitStore::new(cfg.unit_dir()?, cfg.user_mode),
        control: &mut control,
        confirmer: confirmer.as_mut(),
        out: &mut stdout,
        base_dir: cfg.base_dir()?,
        default_user: cfg.default_user.clone(),
        require_root: cfg.require_root,
    };

    match &args.sub {
        Cmd::Create(create) => commands::create(create, &mut ctx)?,
        Cmd::Remove(remove) => commands::remove(remove, &mut ctx)?,
        Cmd::Status(status) => {
            let running = commands::status(status, &mut ctx)?;
            return Ok(if running { 0 } else { error::EXIT_FAILURE });
        }
    }
    Ok(0)
}
