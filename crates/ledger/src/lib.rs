//! Fungible credential ledger for Agora
//!
//! The governance engine gates voting eligibility on credential ownership
//! but never moves credentials itself: it consumes the read-only side of
//! the [`CredentialLedger`] trait (`balance_of`, `name`, `symbol`).
//!
//! [`InMemoryLedger`] is a complete reference implementation with minting
//! at construction and holder-to-holder transfers, used by tests and by
//! embedders that do not bring their own ledger.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use agora_core::AccountId;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error types for ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A transfer was attempted for more credential than the sender holds
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount the transfer needed
        required: u64,
        /// Amount the sender actually holds
        available: u64,
    },

    /// A transfer targeted a blank identity
    #[error("Transfer to a blank identity")]
    InvalidRecipient,
}

/// Read-only view of a fungible credential ledger.
///
/// This is the only capability the governance engine requires from the
/// ledger; lookups must be side-effect-free.
#[async_trait]
pub trait CredentialLedger: Send + Sync {
    /// Credential balance of the given holder; zero for unknown holders
    async fn balance_of(&self, holder: &AccountId) -> u64;

    /// Human-readable name of the credential
    async fn name(&self) -> String;

    /// Short symbol of the credential
    async fn symbol(&self) -> String;
}

/// In-memory credential ledger.
///
/// The full supply is minted to the `owner` account at construction.
pub struct InMemoryLedger {
    name: String,
    symbol: String,
    total_supply: u64,
    balances: RwLock<HashMap<AccountId, u64>>,
}

impl InMemoryLedger {
    /// Create a new ledger, minting the full supply to `owner`
    pub fn new<S: Into<String>>(name: S, symbol: S, total_supply: u64, owner: AccountId) -> Self {
        let mut balances = HashMap::new();
        balances.insert(owner.clone(), total_supply);

        let ledger = Self {
            name: name.into(),
            symbol: symbol.into(),
            total_supply,
            balances: RwLock::new(balances),
        };

        info!(
            "Created credential ledger {} ({}), supply {} minted to {}",
            ledger.name, ledger.symbol, total_supply, owner
        );

        ledger
    }

    /// Total credential supply, constant for the ledger's lifetime
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Move `amount` credential units from one holder to another.
    ///
    /// Not used by the governance engine; provided for embedders and tests
    /// that need to distribute voting eligibility.
    pub async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> LedgerResult<()> {
        if to.is_blank() {
            return Err(LedgerError::InvalidRecipient);
        }

        let mut balances = self.balances.write().await;

        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }

        *balances.entry(from.clone()).or_insert(0) -= amount;
        *balances.entry(to.clone()).or_insert(0) += amount;

        debug!("Transferred {} {} from {} to {}", amount, self.symbol, from, to);

        Ok(())
    }
}

#[async_trait]
impl CredentialLedger for InMemoryLedger {
    async fn balance_of(&self, holder: &AccountId) -> u64 {
        let balances = self.balances.read().await;
        balances.get(holder).copied().unwrap_or(0)
    }

    async fn name(&self) -> String {
        self.name.clone()
    }

    async fn symbol(&self) -> String {
        self.symbol.clone()
    }
}
