use std::path::Path;
use std::process::Command;

use super::LaunchError;
use crate::config::OsEnvMap;

/// Replaces the current process image with `binary`.
///
/// Only returns if the replacement failed. `argv[0]` is passed through as the
/// new process's own name; `env` becomes its complete environment.
#[cfg(unix)]
pub(crate) fn replace(binary: &Path, argv: &[String], env: &OsEnvMap) -> LaunchError {
    use std::os::unix::process::CommandExt;

    let (arg0, args) = split_argv(argv);
    let source = Command::new(binary)
        .arg0(arg0)
        .args(args)
        .env_clear()
        .envs(env)
        .exec();

    LaunchError::Exec {
        path: binary.to_path_buf(),
        source,
    }
}

/// Without exec, run the child to completion and exit with its status.
#[cfg(not(unix))]
pub(crate) fn replace(binary: &Path, argv: &[String], env: &OsEnvMap) -> LaunchError {
    let (_, args) = split_argv(argv);
    match Command::new(binary).args(args).env_clear().envs(env).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => LaunchError::Exec {
            path: binary.to_path_buf(),
            source,
        },
    }
}

fn split_argv(argv: &[String]) -> (&str, &[String]) {
    match argv.split_first() {
        Some((first, rest)) => (first.as_str(), rest),
        None => ("", argv),
    }
}
