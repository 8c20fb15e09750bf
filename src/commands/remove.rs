use crate::cli::RemoveArgs;
use crate::descriptor::{check_name, unit_file_name};
use crate::error::ServiceError;
use crate::privileges::ensure_root;

use super::{Context, output_error};

/// Stop, disable and delete a unit, then reload the daemon
pub fn remove(args: &RemoveArgs, ctx: &mut Context<'_>) -> Result<(), ServiceError> {
    ensure_root(ctx.require_root)?;

    check_name(&args.name)?;
    if !ctx.store.exists(&args.name) {
        return Err(ServiceError::NotFound(args.name.clone()));
    }

    if !args.yes {
        let question = format!("Do you really want to remove the service \"{}\"?", args.name);
        if !ctx.confirmer.confirm(&question)? {
            return Err(ServiceError::Declined);
        }
    }

    // The unit may already be stopped or never have been enabled
    let unit = unit_file_name(&args.name);
    if let Err(e) = ctx.control.stop(&unit) {
        log::warn!("{e}");
    }
    if let Err(e) = ctx.control.disable(&unit) {
        log::warn!("{e}");
    }

    let unit_path = ctx.store.remove(&args.name)?;
    ctx.control.daemon_reload()?;

    writeln!(
        ctx.out,
        "Service removed successfully: \"{}\"",
        unit_path.display()
    )
    .map_err(output_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::commands::testing::{FakeControl, ScriptedConfirmer};
    use crate::unit::UnitStore;

    fn run(
        dir: &std::path::Path,
        args: &RemoveArgs,
        control: &mut FakeControl,
        confirmer: &mut ScriptedConfirmer,
    ) -> Result<String, ServiceError> {
        let mut out = Vec::new();
        let mut ctx = Context {
            store: UnitStore::new(dir, false),
            control,
            confirmer,
            out: &mut out,
            base_dir: dir.to_path_buf(),
            default_user: "root".into(),
            require_root: false,
        };
        remove(args, &mut ctx)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn args(yes: bool) -> RemoveArgs {
        RemoveArgs {
            name: "myapp".into(),
            yes,
        }
    }

    #[test]
    fn removes_existing_unit() {
        let dir = tempfile::tempdir().unwrap();
        let unit = dir.path().join("myapp.service");
        fs::write(&unit, "[Unit]\n").unwrap();
        let mut control = FakeControl {
            failing: vec!["stop"],
            ..FakeControl::default()
        };

        let out = run(dir.path(), &args(true), &mut control, &mut ScriptedConfirmer::default())
            .unwrap();

        assert!(!unit.exists());
        assert_eq!(
            control.calls,
            ["stop myapp.service", "disable myapp.service", "daemon-reload"]
        );
        assert_eq!(out, format!("Service removed successfully: \"{}\"\n", unit.display()));
    }

    #[test]
    fn missing_unit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut control = FakeControl::default();
        let err = run(dir.path(), &args(true), &mut control, &mut ScriptedConfirmer::default())
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(name) if name == "myapp"));
        assert!(control.calls.is_empty());
    }

    #[test]
    fn path_like_name_deletes_nothing_outside() {
        let dir = tempfile::tempdir().unwrap();
        let units = dir.path().join("units");
        fs::create_dir(&units).unwrap();
        let outside = dir.path().join("x.service");
        fs::write(&outside, "[Unit]\n").unwrap();
        let mut control = FakeControl::default();

        let err = run(
            &units,
            &RemoveArgs {
                name: "../x".into(),
                yes: true,
            },
            &mut control,
            &mut ScriptedConfirmer::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidName(_)));
        assert!(outside.exists());
        assert!(control.calls.is_empty());
    }

    #[test]
    fn declining_keeps_the_unit() {
        let dir = tempfile::tempdir().unwrap();
        let unit = dir.path().join("myapp.service");
        fs::write(&unit, "[Unit]\n").unwrap();
        let mut control = FakeControl::default();
        let mut confirmer = ScriptedConfirmer::answering(&[false]);

        let err = run(dir.path(), &args(false), &mut control, &mut confirmer).unwrap_err();

        assert!(matches!(err, ServiceError::Declined));
        assert!(unit.exists());
        assert!(control.calls.is_empty());
    }
}
