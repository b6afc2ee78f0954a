//! Load `KEY=VALUE` env files, merge them under the live environment, and
//! replace the current process with a command.

pub mod cli;
pub mod config;
mod error;
pub mod launch;
pub mod logging;

pub use config::{ConfigError, EnvBuilder, EnvMap, OsEnvMap};
pub use error::Error;
pub use launch::{launch, LaunchError, LaunchRequest};
