//! Executable lookup on a search path.

use std::ffi::OsStr;
use std::io;
use std::path::{is_separator, Component, Path, PathBuf};

use super::LaunchError;

/// Locates `command` and returns its absolute path.
///
/// A command containing a path separator is checked directly; anything else
/// is looked up in each `search_path` entry in order. Relative candidates,
/// including empty entries (the current directory), are anchored at the
/// directory returned by `current_dir`, which is only called when such a
/// candidate exists.
pub fn find_executable<F>(
    command: &str,
    search_path: Option<&OsStr>,
    current_dir: F,
) -> Result<PathBuf, LaunchError>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let not_found = || LaunchError::CommandNotFound(command.to_string());

    if command.is_empty() {
        return Err(not_found());
    }

    let direct = command.contains(is_separator);
    let entries: Vec<PathBuf> = match search_path {
        _ if direct => Vec::new(),
        Some(path) => std::env::split_paths(path).collect(),
        None => return Err(not_found()),
    };

    let needs_cwd = if direct {
        Path::new(command).is_relative()
    } else {
        entries.iter().any(|dir| dir.is_relative())
    };

    // With nothing relative to anchor, the root stands in and is never read.
    let cwd = if needs_cwd {
        current_dir().map_err(|source| LaunchError::PathResolution {
            command: command.to_string(),
            source,
        })?
    } else {
        PathBuf::from(Component::RootDir.as_os_str())
    };

    let paths = if direct {
        None
    } else {
        let anchored = entries.iter().map(|dir| cwd.join(dir));
        Some(std::env::join_paths(anchored).map_err(|_| not_found())?)
    };

    let found = which::which_in(command, paths, &cwd).map_err(|_| not_found())?;
    Ok(normalize(&found))
}

/// Lexically drops `.` components. Symlinks are left alone.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
