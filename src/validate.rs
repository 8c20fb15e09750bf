//! Argument validation: raw `create` flags to a [`ServiceDescriptor`]

use std::path::{Path, PathBuf};

use crate::cli::CreateArgs;
use crate::config::BIN_NAME;
use crate::descriptor::{
    ExecSpec, ServiceDescriptor, ServiceType, check_name, default_description,
};
use crate::error::ServiceError;

/// Flag-level checks that need no filesystem access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFlags<'a> {
    pub exec: RawExec<'a>,
    pub service_type: ServiceType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawExec<'a> {
    File(&'a str),
    Command(&'a str),
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Values end up on one `Key=value` line of the unit file
fn single_line(field: &'static str, value: &Option<String>) -> Result<(), ServiceError> {
    match value {
        Some(v) if v.contains(['\n', '\r']) => Err(ServiceError::MultiLine(field)),
        _ => Ok(()),
    }
}

/// Reject missing or contradictory flag combinations
pub fn check_flags(args: &CreateArgs) -> Result<CheckedFlags<'_>, ServiceError> {
    check_name(&args.name)?;
    single_line("description", &args.description)?;
    single_line("user", &args.user)?;
    single_line("group", &args.group)?;
    single_line("exec command", &args.exec)?;
    single_line("exec file", &args.file)?;

    let exec = match (non_empty(&args.file), non_empty(&args.exec)) {
        (Some(file), None) => RawExec::File(file),
        (None, Some(cmd)) => RawExec::Command(cmd),
        _ => {
            return Err(ServiceError::ExecSpec {
                bin: BIN_NAME.to_string(),
            });
        }
    };

    let service_type = non_empty(&args.service_type)
        .ok_or(ServiceError::InvalidType)?
        .parse::<ServiceType>()?;

    Ok(CheckedFlags { exec, service_type })
}

/// Resolve a `--file` argument against `base_dir`.
///
/// Absolute paths are returned unchanged; `./x` and `x` both become
/// `base_dir/x`.
pub fn resolve_exec_path(file: &str, base_dir: &Path) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let relative = file.strip_prefix("./").unwrap_or(file);
    base_dir.join(relative)
}

/// Full validation: flag checks, path resolution, existence check and
/// defaults for description and user
pub fn validate(
    args: &CreateArgs,
    base_dir: &Path,
    default_user: &str,
) -> Result<ServiceDescriptor, ServiceError> {
    let flags = check_flags(args)?;

    let exec = match flags.exec {
        RawExec::File(file) => {
            let resolved = resolve_exec_path(file, base_dir);
            log::debug!("Resolved exec file {file} to {}", resolved.display());
            if !resolved.is_file() {
                return Err(ServiceError::FileNotFound(resolved));
            }
            ExecSpec::File(resolved)
        }
        RawExec::Command(cmd) => ExecSpec::Command(cmd.to_string()),
    };

    Ok(ServiceDescriptor {
        name: args.name.clone(),
        description: non_empty(&args.description)
            .map(str::to_string)
            .unwrap_or_else(|| default_description(&args.name)),
        user: non_empty(&args.user).unwrap_or(default_user).to_string(),
        group: non_empty(&args.group).map(str::to_string),
        service_type: flags.service_type,
        exec,
    })
}
