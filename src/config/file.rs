//! File-based environment source.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::parse::parse_env;
use super::source::{EnvMap, EnvSource};
use super::ConfigError;

/// An environment layer loaded from a `KEY=VALUE` file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl EnvSource for FileSource {
    fn load(&self) -> Result<Option<EnvMap>, ConfigError> {
        load_env_file(&self.path, self.required)
    }
}

/// Loads and parses an env file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn load_env_file(path: &Path, required: bool) -> Result<Option<EnvMap>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let vars = parse_env(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: e.line,
                reason: e.reason,
            })?;
            debug!(path = %path.display(), count = vars.len(), "loaded env file");
            Ok(Some(vars))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                info!("env file {} not found, skipping", path.display());
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "FOO=bar").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "BAZ=\"quoted value\"").unwrap();

        let source = FileSource::new(file.path(), true);
        let vars = source.load().unwrap().unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars["FOO"], "bar");
        assert_eq!(vars["BAZ"], "quoted value");
    }

    #[test]
    fn test_file_source_required_missing() {
        let source = FileSource::new("/nonexistent/path/.env", true);
        let result = source.load();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let source = FileSource::new("/nonexistent/path/.env", false);
        assert!(source.load().unwrap().is_none());
    }

    #[test]
    fn test_file_source_parse_error_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "OK=1").unwrap();
        writeln!(file, "not a pair").unwrap();

        let source = FileSource::new(file.path(), false);
        match source.load() {
            Err(ConfigError::ParseError { path, line, .. }) => {
                assert_eq!(path, file.path());
                assert_eq!(line, 2);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_source_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path(), false);

        assert!(matches!(source.load(), Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_file_source_non_utf8_is_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"KEY=\xff\xfe\n").unwrap();

        let source = FileSource::new(file.path(), false);
        assert!(matches!(source.load(), Err(ConfigError::ReadError { .. })));
    }
}
