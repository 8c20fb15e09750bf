//! Command workflows. Each takes its collaborators through [`Context`] so
//! the same code runs against systemd or against test doubles.

mod create;
mod remove;
mod status;

pub use create::{OverwriteState, create};
pub use remove::remove;
pub use status::status;

use std::io::{self, Write};
use std::path::PathBuf;

use crate::control::ServiceControl;
use crate::error::ServiceError;
use crate::prompt::Confirmer;
use crate::unit::UnitStore;

/// Everything a command needs besides its own flags
pub struct Context<'a> {
    pub store: UnitStore,
    pub control: &'a mut dyn ServiceControl,
    pub confirmer: &'a mut dyn Confirmer,
    /// User-facing messages
    pub out: &'a mut dyn Write,
    /// Directory relative `--file` paths resolve against
    pub base_dir: PathBuf,
    pub default_user: String,
    pub require_root: bool,
}

/// A command whose output cannot be delivered has failed
fn output_error(e: io::Error) -> ServiceError {
    ServiceError::Output(e.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording doubles shared by the command tests

    use std::collections::VecDeque;
    use std::io;

    use crate::control::ServiceControl;
    use crate::error::ServiceError;
    use crate::prompt::Confirmer;

    #[derive(Default)]
    pub struct FakeControl {
        pub calls: Vec<String>,
        /// Operation names ("start", "enable", ...) that should fail
        pub failing: Vec<&'static str>,
        pub active: bool,
    }

    impl FakeControl {
        fn record(&mut self, op: &'static str, unit: Option<&str>) -> Result<(), String> {
            self.calls.push(match unit {
                Some(unit) => format!("{op} {unit}"),
                None => op.to_string(),
            });
            if self.failing.contains(&op) {
                Err(format!("{op} failed"))
            } else {
                Ok(())
            }
        }
    }

    impl ServiceControl for FakeControl {
        fn daemon_reload(&mut self) -> Result<(), ServiceError> {
            self.record("daemon-reload", None).map_err(ServiceError::Reload)
        }
        fn start(&mut self, unit: &str) -> Result<(), ServiceError> {
            self.record("start", Some(unit)).map_err(ServiceError::Start)
        }
        fn stop(&mut self, unit: &str) -> Result<(), ServiceError> {
            self.record("stop", Some(unit)).map_err(ServiceError::Stop)
        }
        fn enable(&mut self, unit: &str) -> Result<(), ServiceError> {
            self.record("enable", Some(unit)).map_err(ServiceError::Enable)
        }
        fn disable(&mut self, unit: &str) -> Result<(), ServiceError> {
            self.record("disable", Some(unit)).map_err(ServiceError::Disable)
        }
        fn is_active(&mut self, unit: &str) -> Result<bool, ServiceError> {
            self.record("is-active", Some(unit)).map_err(ServiceError::Status)?;
            Ok(self.active)
        }
    }

    /// Writer whose reader has gone away
    pub struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    /// Answers queued in advance; panics if asked more often than expected
    #[derive(Default)]
    pub struct ScriptedConfirmer {
        pub answers: VecDeque<bool>,
        pub asked: Vec<String>,
    }

    impl ScriptedConfirmer {
        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&mut self, question: &str) -> Result<bool, ServiceError> {
            self.asked.push(question.to_string());
            Ok(self
                .answers
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected prompt: {question}")))
        }
    }
}
