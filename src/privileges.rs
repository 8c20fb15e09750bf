//! Privilege checking for operations that write system units.

use crate::error::ServiceError;

/// Check if running as root
#[inline]
pub fn is_root() -> bool {
    nix::unistd::geteuid().is_root()
}

/// Fail with [`ServiceError::NotRoot`] unless the check is disabled or the
/// process runs as root
pub fn ensure_root(required: bool) -> Result<(), ServiceError> {
    if required && !is_root() {
        return Err(ServiceError::NotRoot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_check_always_passes() {
        assert!(ensure_root(false).is_ok());
    }

    #[test]
    fn enabled_check_follows_euid() {
        assert_eq!(ensure_root(true).is_ok(), is_root());
    }
}
