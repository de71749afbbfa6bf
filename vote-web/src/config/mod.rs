mod env;
pub use env::EnvConfig;

mod file;
pub use file::{FileConfig, Flag};

use crate::{Result, VoteOption, VoteOptions};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "config_file.cfg";

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_REDIS_URI: &str = "redis://127.0.0.1:6379/";
const DEFAULT_REDIS_MAX_CONNECTIONS: usize = 16;
const DEFAULT_TITLE: &str = "Azure Voting App";
const DEFAULT_VOTE1VALUE: &str = "Cats";
const DEFAULT_VOTE2VALUE: &str = "Dogs";

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Redis,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub redis_uri: String,
    pub redis_max_connections: usize,
    pub store_backend: StoreBackend,
    pub json_log: bool,
    pub title: String,
    pub show_host: bool,
    pub options: VoteOptions,
}

impl Config {
    /// Reads the environment, then the config file it points at (or
    /// `config_file.cfg` in the working directory, if present).
    pub fn load() -> Result<Config> {
        let env = EnvConfig::from_env()?;

        let file = match &env.config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::load_optional(Path::new(DEFAULT_CONFIG_FILE))?.unwrap_or_default(),
        };

        Config::resolve(env, file)
    }

    /// Environment values win over file values, which win over defaults.
    pub fn resolve(env: EnvConfig, file: FileConfig) -> Result<Config> {
        let vote1 = env
            .vote1value
            .or(file.vote1value)
            .unwrap_or_else(|| DEFAULT_VOTE1VALUE.to_owned());
        let vote2 = env
            .vote2value
            .or(file.vote2value)
            .unwrap_or_else(|| DEFAULT_VOTE2VALUE.to_owned());

        let show_host = match (env.showhost, file.showhost) {
            (Some(value), _) => file::is_true(&value),
            (None, Some(flag)) => flag.is_enabled(),
            (None, None) => false,
        };

        let options = VoteOptions::new(VoteOption::from_value(vote1), VoteOption::from_value(vote2))?;

        Ok(Config {
            server_addr: env
                .server_addr
                .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_owned()),
            redis_uri: env
                .redis_uri
                .unwrap_or_else(|| DEFAULT_REDIS_URI.to_owned()),
            redis_max_connections: env
                .redis_max_connections
                .unwrap_or(DEFAULT_REDIS_MAX_CONNECTIONS),
            store_backend: env.store_backend.unwrap_or_default(),
            json_log: env.json_log,
            title: env
                .title
                .or(file.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            show_host,
            options,
        })
    }

    /// The page heading: the host name when `show_host` is set and the host
    /// name can be determined, the configured title otherwise.
    pub fn page_title<F>(&self, host_name: F) -> String
    where
        F: FnOnce() -> Option<String>,
    {
        if !self.show_host {
            return self.title.clone();
        }

        match host_name() {
            Some(name) => name,
            None => {
                warn!("Could not determine host name, using configured title");
                self.title.clone()
            }
        }
    }
}
