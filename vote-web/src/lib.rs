pub mod http;
pub mod render;

mod config;
pub use config::{Config, EnvConfig, FileConfig, Flag, StoreBackend};

mod error;
pub use error::{Error, Result};

mod service;
pub use service::{Totals, VoteOption, VoteOptions, VoteService, RESET_VOTE};
