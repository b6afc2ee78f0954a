use crate::config::ConfigError;
use crate::launch::LaunchError;
use thiserror::Error;

/// Top-level error type for env-run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no command given")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl Error {
    /// Process exit status to report for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage | Error::Config(_) | Error::Launch(_) => 1,
        }
    }
}
