use crate::Result;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use std::fs;

/// The UI settings file. Lines take the form `KEY = 'value'`, which is read as TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct FileConfig {
    pub vote1value: Option<String>,
    pub vote2value: Option<String>,
    pub title: Option<String>,
    pub showhost: Option<Flag>,
}

/// A boolean that may be written either as a TOML bool or as a string.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn is_enabled(&self) -> bool {
        match self {
            Flag::Bool(enabled) => *enabled,
            Flag::Text(text) => is_true(text),
        }
    }
}

pub(crate) fn is_true(text: &str) -> bool {
    text == "true"
}

impl FileConfig {
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(Into::into)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Like [`FileConfig::load`], but a missing file yields `None`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
