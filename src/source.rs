//! Reading registries from their RON form.

use anyhow::{Context, Result};
use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::filespec::{self, FileSpec};

pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    ron::de::from_str(s).map_err(Into::into)
}

pub fn from_filespec<T: DeserializeOwned>(file_spec: &FileSpec) -> Result<T> {
    let content = filespec::read_file(file_spec)?;
    ron::de::from_str(&content).with_context(|| format!("parsing {}", file_spec))
}

/// Renders `value` as pretty RON, with struct names so that the output can be
/// read back.
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    let config = PrettyConfig::new().struct_names(true);
    let mut s = ron::ser::to_string_pretty(value, config)?;
    s.push('\n');
    Ok(s)
}
