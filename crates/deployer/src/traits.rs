//! Trait definitions for the system boundaries of a deployment.
//!
//! These traits abstract the build output and blockchain interactions to
//! enable unit testing with mocks.

use {
    alloy::primitives::{Address, TxHash},
    anyhow::{Context, Result},
    contracts::{Artifacts, ContractFactory},
};

/// Abstracts looking up compiled contracts.
#[cfg_attr(test, mockall::automock)]
pub trait ContractResolving: Send + Sync {
    /// Returns the factory of the contract called `name`.
    fn resolve(&self, name: &str) -> Result<ContractFactory>;
}

impl ContractResolving for Artifacts {
    fn resolve(&self, name: &str) -> Result<ContractFactory> {
        Ok(self.factory(name)?)
    }
}

/// Abstracts blockchain write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Network: Send + Sync {
    /// Signs and broadcasts a transaction creating a new instance of the
    /// contract. Returns as soon as the node accepted the transaction.
    async fn submit(&self, factory: &ContractFactory) -> Result<TxHash>;

    /// Waits until the transaction got mined and confirmed. There is no
    /// timeout unless the implementation is configured with one.
    async fn confirm(&self, tx: TxHash) -> Result<ConfirmedDeployment>;
}

/// Receipt data of a mined deployment transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedDeployment {
    pub tx: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub contract_address: Option<Address>,
}

impl ConfirmedDeployment {
    /// Address of the created contract.
    pub fn address(&self) -> Result<Address> {
        self.contract_address
            .with_context(|| format!("receipt of {:?} has no contract address", self.tx))
    }
}
