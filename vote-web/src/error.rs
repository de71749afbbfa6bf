use counter_store::StoreError;
use std::{io, net};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid vote option: {0}")]
    InvalidOption(String),

    #[error("missing vote field")]
    MissingVote,

    #[error("counter store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("error occurred while reading config from environment: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("error occurred while parsing config file: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("error occurred during I/O operation: {0}")]
    IoError(#[from] io::Error),

    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("error occurred in hyper: {0}")]
    HyperError(#[from] hyper::Error),
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
