use super::source::{EnvMap, EnvSource, OsEnvMap};
use super::ConfigError;

/// Snapshots the current process environment.
///
/// Names and values are kept as the OS reports them, UTF-8 or not.
pub fn capture_process_env() -> OsEnvMap {
    std::env::vars_os().collect()
}

/// A fixed, in-memory layer.
#[derive(Debug, Clone, Default)]
pub struct VarsSource {
    vars: EnvMap,
}

impl VarsSource {
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for VarsSource {
    fn load(&self) -> Result<Option<EnvMap>, ConfigError> {
        Ok(Some(self.vars.clone()))
    }
}
