pub mod application;
pub mod job;
pub mod profile;

use thiserror::Error;

/// A rejected lifecycle change on a job posting or application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("status is already '{0}'")]
    Unchanged(String),

    #[error("cannot move from '{from}' to '{to}'")]
    NotAllowed { from: String, to: String },
}
