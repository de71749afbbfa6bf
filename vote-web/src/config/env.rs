use super::StoreBackend;
use crate::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings read from environment variables. Every field is optional; unset
/// values fall back to the config file, then to built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct EnvConfig {
    pub server_addr: Option<String>,
    pub redis_uri: Option<String>,
    pub redis_max_connections: Option<usize>,
    pub store_backend: Option<StoreBackend>,
    #[serde(default)]
    pub json_log: bool,
    pub config_file: Option<PathBuf>,

    pub vote1value: Option<String>,
    pub vote2value: Option<String>,
    pub title: Option<String>,
    pub showhost: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        envy::from_env().map_err(Into::into)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(Into::into)
    }
}
