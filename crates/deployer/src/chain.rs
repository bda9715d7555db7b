use {
    crate::traits::{ConfirmedDeployment, Network},
    alloy::{
        network::{ReceiptResponse, TransactionBuilder},
        primitives::TxHash,
        providers::{PendingTransactionBuilder, Provider},
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result, ensure},
    contracts::ContractFactory,
    ethrpc::Web3,
    std::time::Duration,
};

/// Deploys contracts through a node, signing with the wallet of the [`Web3`]
/// instance.
pub struct Chain {
    web3: Web3,
    confirmations: u64,
    timeout: Option<Duration>,
}

impl Chain {
    pub fn new(web3: Web3, confirmations: u64, timeout: Option<Duration>) -> Self {
        Self {
            web3,
            confirmations,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl Network for Chain {
    async fn submit(&self, factory: &ContractFactory) -> Result<TxHash> {
        let chain_id = self
            .web3
            .alloy
            .get_chain_id()
            .await
            .context("could not fetch current chain id")?;
        tracing::info!(chain_id, deployer = %self.web3.signer, "connected to network");

        let tx = TransactionRequest::default()
            .with_from(self.web3.signer)
            .with_deploy_code(factory.bytecode().clone());
        let pending = self
            .web3
            .alloy
            .send_transaction(tx)
            .await
            .context("node rejected deployment transaction")?;
        Ok(*pending.tx_hash())
    }

    async fn confirm(&self, tx: TxHash) -> Result<ConfirmedDeployment> {
        let receipt = PendingTransactionBuilder::new(self.web3.alloy.root().clone(), tx)
            .with_required_confirmations(self.confirmations)
            .with_timeout(self.timeout)
            .get_receipt()
            .await
            .context("could not confirm deployment transaction")?;
        ensure!(receipt.status(), "deployment transaction {tx:?} reverted");

        Ok(ConfirmedDeployment {
            tx,
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
            contract_address: receipt.contract_address(),
        })
    }
}
