use crate::cli::CreateArgs;
use crate::error::ServiceError;
use crate::privileges::ensure_root;
use crate::prompt::Confirmer;
use crate::unit::render;
use crate::validate::validate;

use super::{Context, output_error};

/// Whether an existing unit may be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteState {
    NoConflict,
    /// Unit exists, `--overwrite` given, waiting for the user
    ConflictPending,
    Confirmed,
    Declined,
}

impl OverwriteState {
    /// Initial state from the unit's existence and the flags.
    /// An existing unit without `--overwrite` is an error straight away.
    pub fn initial(exists: bool, overwrite: bool, yes: bool) -> Result<Self, ServiceError> {
        match (exists, overwrite, yes) {
            (false, _, _) => Ok(OverwriteState::NoConflict),
            (true, false, _) => Err(ServiceError::AlreadyExists),
            (true, true, true) => Ok(OverwriteState::Confirmed),
            (true, true, false) => Ok(OverwriteState::ConflictPending),
        }
    }

    /// Ask the user if a decision is still pending
    pub fn resolve(self, confirmer: &mut dyn Confirmer, name: &str) -> Result<Self, ServiceError> {
        if self != OverwriteState::ConflictPending {
            return Ok(self);
        }
        let question = format!("Do you really want to overwrite the service \"{name}\"?");
        if confirmer.confirm(&question)? {
            Ok(OverwriteState::Confirmed)
        } else {
            Ok(OverwriteState::Declined)
        }
    }

    pub fn may_write(self) -> bool {
        matches!(self, OverwriteState::NoConflict | OverwriteState::Confirmed)
    }
}

/// Validate, confirm, write the unit, reload and optionally start/enable
pub fn create(args: &CreateArgs, ctx: &mut Context<'_>) -> Result<(), ServiceError> {
    if !args.dry_run {
        ensure_root(ctx.require_root)?;
    }

    let desc = validate(args, &ctx.base_dir, &ctx.default_user)?;
    let state = OverwriteState::initial(ctx.store.exists(&desc.name), args.overwrite, args.yes)?;
    log::debug!("Overwrite state for {}: {state:?}", desc.name);

    if args.dry_run {
        write!(ctx.out, "{}", render(&desc, ctx.store.user_mode())).map_err(output_error)?;
        ctx.out.flush().map_err(output_error)?;
        return Ok(());
    }

    let state = state.resolve(&mut *ctx.confirmer, &desc.name)?;
    if !state.may_write() {
        return Err(ServiceError::Declined);
    }

    let unit_path = ctx.store.write(&desc)?;
    writeln!(
        ctx.out,
        "Service created successfully: \"{}\"",
        unit_path.display()
    )
    .map_err(output_error)?;

    ctx.control.daemon_reload()?;

    let unit = desc.unit_file_name();
    if args.start {
        ctx.control.start(&unit)?;
        writeln!(ctx.out, "Service started successfully").map_err(output_error)?;
    }
    if args.enable {
        ctx.control.enable(&unit)?;
        writeln!(ctx.out, "Service enabled successfully").map_err(output_error)?;
    }

    Ok(())
}
