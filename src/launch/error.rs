use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LaunchError {
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("unable to resolve absolute path of '{command}': {source}")]
    PathResolution {
        command: String,
        source: std::io::Error,
    },

    #[error("unable to change directory to '{dir}': {source}")]
    Chdir {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to execute '{path}': {source}")]
    Exec {
        path: PathBuf,
        source: std::io::Error,
    },
}
