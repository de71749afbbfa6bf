use crate::{Error, Result};

/// The form value that zeroes both counters. No option key may use it.
pub const RESET_VOTE: &str = "reset";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteOption {
    pub label: String,
    pub key: String,
}

impl VoteOption {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> VoteOption {
        VoteOption {
            label: label.into(),
            key: key.into(),
        }
    }

    /// An option whose button label doubles as its counter key.
    pub fn from_value(value: impl Into<String>) -> VoteOption {
        let value = value.into();
        VoteOption {
            label: value.clone(),
            key: value,
        }
    }
}

/// The two choices offered by a deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteOptions {
    pub first: VoteOption,
    pub second: VoteOption,
}

impl VoteOptions {
    pub fn new(first: VoteOption, second: VoteOption) -> Result<VoteOptions> {
        for option in [&first, &second] {
            if option.key.trim().is_empty() {
                return Error::InvalidConfig("vote option key must not be empty".to_owned()).into();
            }

            if option.key == RESET_VOTE {
                return Error::InvalidConfig(format!(
                    "vote option key must not be \"{RESET_VOTE}\""
                ))
                .into();
            }
        }

        if first.key == second.key {
            return Error::InvalidConfig(format!(
                "vote option keys must differ, both are \"{}\"",
                first.key
            ))
            .into();
        }

        Ok(VoteOptions { first, second })
    }

    pub fn keys(&self) -> [&str; 2] {
        [self.first.key.as_str(), self.second.key.as_str()]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }
}
