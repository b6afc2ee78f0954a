use std::path::Path;

use tracing::debug;

use super::env::{capture_process_env, VarsSource};
use super::file::FileSource;
use super::source::{merge, EnvSource, OsEnvMap};
use super::ConfigError;

/// Builder for the final environment of a launched command.
///
/// Layers are merged in registration order, with later layers overriding
/// earlier ones key by key. The live process environment, when requested,
/// is applied after every layer. Values are replaced entirely; nothing is
/// interpolated.
///
/// ## Example
///
/// ```no_run
/// use env_run::EnvBuilder;
///
/// // defaults -> local overrides -> live environment wins
/// let env = EnvBuilder::new()
///     .with_file(".env", false)
///     .with_file(".env.local", false)
///     .with_process_env()
///     .build()?;
/// # Ok::<(), env_run::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct EnvBuilder {
    sources: Vec<Box<dyn EnvSource>>,
    process_env: bool,
}

impl EnvBuilder {
    /// Creates a builder with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an env file layer.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds a fixed set of variables as a layer.
    pub fn with_vars<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_source(VarsSource::new(vars))
    }

    /// Places the live process environment above every layer.
    ///
    /// The environment is read once, during [`build`](Self::build), after all
    /// layers have loaded.
    pub fn with_process_env(mut self) -> Self {
        self.process_env = true;
        self
    }

    /// Adds any other layer.
    pub fn with_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads every layer, then merges them under the live environment.
    ///
    /// All layers are loaded before anything is merged, so a malformed file
    /// fails the build without producing a partial environment.
    pub fn build(self) -> Result<OsEnvMap, ConfigError> {
        let layers = self
            .sources
            .iter()
            .map(|source| source.load())
            .collect::<Result<Vec<_>, _>>()?;

        let base = if self.process_env {
            capture_process_env()
        } else {
            OsEnvMap::new()
        };

        let merged = merge(layers, &base);
        debug!(count = merged.len(), "merged environment");
        Ok(merged)
    }
}
