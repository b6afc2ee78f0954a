//! Command resolution and process replacement.

mod error;
mod exec;
mod resolve;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::OsEnvMap;

pub use error::LaunchError;
pub use resolve::find_executable;

/// What to run, with which arguments, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    argv: Vec<String>,
    workdir: Option<PathBuf>,
}

impl LaunchRequest {
    /// Creates a request from a command line whose first element is the
    /// command itself.
    ///
    /// Returns `None` when `argv` is empty.
    pub fn new(argv: Vec<String>, workdir: Option<PathBuf>) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        Some(Self { argv, workdir })
    }

    /// The command as typed, before resolution.
    pub fn command(&self) -> &str {
        &self.argv[0]
    }

    /// The full argument vector, command first.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }
}

/// Resolves the command and replaces the current process with it.
///
/// On success this never returns. The returned error describes why the
/// replacement did not happen.
pub fn launch(request: &LaunchRequest, env: &OsEnvMap) -> LaunchError {
    match prepare(request, env) {
        Ok(binary) => exec::replace(&binary, request.argv(), env),
        Err(err) => err,
    }
}

/// Resolves the executable, then applies the working-directory override.
///
/// The search path comes from `env`, the environment the command will see.
/// Lookup is anchored at the directory `env-run` was started in; the
/// directory change happens only once the absolute path is known.
pub fn prepare(request: &LaunchRequest, env: &OsEnvMap) -> Result<PathBuf, LaunchError> {
    let search_path = env.get(OsStr::new("PATH")).map(OsString::as_os_str);
    let binary = find_executable(request.command(), search_path, std::env::current_dir)?;
    debug!(command = request.command(), binary = %binary.display(), "resolved command");

    if let Some(dir) = request.workdir() {
        std::env::set_current_dir(dir).map_err(|source| LaunchError::Chdir {
            dir: dir.to_path_buf(),
            source,
        })?;
        debug!(dir = %dir.display(), "changed working directory");
    }

    Ok(binary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(argv: &[&str], workdir: Option<&str>) -> LaunchRequest {
        LaunchRequest::new(
            argv.iter().map(|s| s.to_string()).collect(),
            workdir.map(PathBuf::from),
        )
        .unwrap()
    }

    fn env_with_path(path: &str) -> OsEnvMap {
        OsEnvMap::from([(OsString::from("PATH"), OsString::from(path))])
    }

    #[test]
    fn test_empty_argv_rejected() {
        assert!(LaunchRequest::new(Vec::new(), None).is_none());
    }

    #[test]
    fn test_request_accessors() {
        let req = request(&["sh", "-c", "echo hi"], Some("sub"));
        assert_eq!(req.command(), "sh");
        assert_eq!(req.argv().len(), 3);
        assert_eq!(req.workdir(), Some(Path::new("sub")));
    }

    #[test]
    fn test_prepare_without_path_is_not_found() {
        let req = request(&["sh"], None);
        let err = prepare(&req, &OsEnvMap::new()).unwrap_err();
        assert!(matches!(err, LaunchError::CommandNotFound(_)));
    }

    #[test]
    fn test_resolution_precedes_chdir() {
        // An unknown command fails before the bogus directory is looked at.
        let req = request(&["no-such-command-env-run"], Some("/nonexistent/dir"));
        let err = prepare(&req, &env_with_path("/usr/bin:/bin")).unwrap_err();
        assert!(matches!(err, LaunchError::CommandNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_workdir_is_chdir_error() {
        let req = request(&["sh"], Some("/nonexistent/dir"));
        let err = prepare(&req, &env_with_path("/usr/bin:/bin")).unwrap_err();
        match err {
            LaunchError::Chdir { dir, .. } => assert_eq!(dir, Path::new("/nonexistent/dir")),
            other => panic!("expected chdir error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_workdir_that_is_a_file_is_chdir_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let req = LaunchRequest::new(vec!["sh".to_string()], Some(file.path().to_path_buf())).unwrap();
        let err = prepare(&req, &env_with_path("/usr/bin:/bin")).unwrap_err();
        assert!(matches!(err, LaunchError::Chdir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_reports_not_found_without_exec() {
        let req = request(&["no-such-command-env-run"], None);
        let err = launch(&req, &env_with_path("/usr/bin:/bin"));
        assert!(matches!(err, LaunchError::CommandNotFound(_)));
    }
}
