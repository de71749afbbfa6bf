mod option;
pub use option::{VoteOption, VoteOptions, RESET_VOTE};

use crate::{Error, Result};
use counter_store::{CounterStore, StoreError};
use tracing::{debug, info};

/// Current counter values, in the order the options were configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub first: u64,
    pub second: u64,
}

impl Totals {
    pub fn new(first: u64, second: u64) -> Totals {
        Totals { first, second }
    }
}

impl From<Totals> for (u64, u64) {
    fn from(totals: Totals) -> Self {
        (totals.first, totals.second)
    }
}

/// Reads and mutates the two option counters. Holds no state of its own
/// beyond the store handle; every call goes to the store.
pub struct VoteService<T: CounterStore> {
    store: T,
    options: VoteOptions,
}

impl<T: CounterStore> VoteService<T> {
    pub fn new(store: T, options: VoteOptions) -> VoteService<T> {
        VoteService { store, options }
    }

    pub fn options(&self) -> &VoteOptions {
        &self.options
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    /// Creates any missing counter at 0. Existing tallies are left untouched.
    pub async fn initialize(&self) -> Result<()> {
        for key in self.options.keys() {
            if self.store.init(key).await? {
                info!(option = key, "Initialised counter");
            } else {
                debug!(option = key, "Counter already present");
            }
        }

        Ok(())
    }

    pub async fn totals(&self) -> Result<Totals> {
        let keys = self.options.keys();
        let values = self.store.get_many(&keys).await?;

        let totals = match values.as_slice() {
            [first, second] => Totals::new(first.unwrap_or(0), second.unwrap_or(0)),
            _ => {
                return Err(StoreError::WrongResultLength {
                    expected: keys.len(),
                    actual: values.len(),
                }
                .into())
            }
        };

        debug!(option = keys[0], votes = totals.first, "Read counter");
        debug!(option = keys[1], votes = totals.second, "Read counter");

        Ok(totals)
    }

    /// Rejects keys that are not one of the two options before touching the store.
    pub async fn cast_vote(&self, key: &str) -> Result<Totals> {
        if !self.options.contains(key) {
            return Error::InvalidOption(key.to_owned()).into();
        }

        let votes = self.store.increment(key).await?;
        info!(option = key, votes, "Recorded vote");

        self.totals().await
    }

    pub async fn reset(&self) -> Result<Totals> {
        let [first, second] = self.options.keys();
        self.store.set_many(&[(first, 0), (second, 0)]).await?;

        info!(first, second, "Reset votes");

        Ok(Totals::default())
    }
}
