use std::collections::BTreeMap;
use std::ffi::OsString;

use super::ConfigError;

/// A flat layer of variables as written in an env file: name to value.
pub type EnvMap = BTreeMap<String, String>;

/// A complete process environment. Names and values need not be UTF-8.
pub type OsEnvMap = BTreeMap<OsString, OsString>;

/// One layer of the final environment.
///
/// `Ok(None)` means the layer is absent (e.g. an optional file that does not
/// exist) and contributes nothing to the merge.
pub trait EnvSource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<Option<EnvMap>, ConfigError>;
}

/// Folds `sources` in order, then applies `base` on top.
///
/// Every key is a total overwrite: a later layer replaces the value bound by
/// an earlier one. Absent layers are skipped.
pub fn merge<I>(sources: I, base: &OsEnvMap) -> OsEnvMap
where
    I: IntoIterator<Item = Option<EnvMap>>,
{
    let mut merged = OsEnvMap::new();
    for layer in sources.into_iter().flatten() {
        merged.extend(layer.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
    merged.extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
