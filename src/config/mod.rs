//! Environment loading and layered merging.

mod builder;
mod env;
mod error;
mod file;
mod parse;
mod source;

pub use builder::EnvBuilder;
pub use env::{capture_process_env, VarsSource};
pub use error::ConfigError;
pub use file::FileSource;
pub use parse::{parse_env, SyntaxError};
pub use source::{merge, EnvMap, EnvSource, OsEnvMap};
