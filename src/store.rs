//! The persistence adapter: one JSON slot holding the whole ledger.
//!
//! The slot is `$FIN_HOME/transactions.json`, a JSON array of transaction
//! objects. Every mutation rewrites the whole slot; a missing slot reads as
//! the empty ledger. There is no versioning and no support for concurrent
//! writers.

use crate::model::Ledger;
use crate::{utils, Home, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Serializes and deserializes the ledger to its storage slot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(home: &Home) -> Self {
        Self {
            path: home.transactions().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the ledger from the slot. A slot that does not exist yet yields
    /// the empty ledger; a slot that exists but cannot be parsed is an error.
    pub async fn load(&self) -> Result<Ledger> {
        if !self.path.is_file() {
            return Ok(Ledger::default());
        }
        utils::deserialize(&self.path).await
    }

    /// Writes the whole ledger to the slot, replacing what was there.
    pub async fn save(&self, ledger: &Ledger) -> Result<()> {
        let data = serde_json::to_string_pretty(ledger).context("Unable to serialize the ledger")?;
        utils::write(&self.path, data)
            .await
            .context("Unable to write the transactions slot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Transaction};
    use crate::test::TestEnv;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_load_missing_slot_is_empty() {
        let env = TestEnv::new().await;
        let ledger = env.store().load().await.unwrap();
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let env = TestEnv::new().await;
        let mut ledger = Ledger::default();
        ledger.push(Transaction::new(
            42,
            "Groceries",
            Amount::from_str("-120.50").unwrap(),
            "Food",
        ));
        env.store().save(&ledger).await.unwrap();

        let loaded = env.store().load().await.unwrap();
        assert_eq!(loaded, ledger);
    }

    #[tokio::test]
    async fn test_corrupt_slot_is_an_error() {
        let env = TestEnv::new().await;
        tokio::fs::write(env.store().path(), "not json")
            .await
            .unwrap();
        let err = env.store().load().await.unwrap_err();
        assert!(err.to_string().contains("transactions.json"));
    }
}
