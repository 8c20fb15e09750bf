use crate::cli::StatusArgs;
use crate::descriptor::{check_name, unit_file_name};
use crate::error::ServiceError;

use super::{Context, output_error};

/// Print whether the service is running. Returns the active state.
pub fn status(args: &StatusArgs, ctx: &mut Context<'_>) -> Result<bool, ServiceError> {
    check_name(&args.name)?;

    let running = ctx.control.is_active(&unit_file_name(&args.name))?;
    let state = if running { "running" } else { "stopped" };
    writeln!(ctx.out, "{} is {state}", args.name).map_err(output_error)?;
    Ok(running)
}
