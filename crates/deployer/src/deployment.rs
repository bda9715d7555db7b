use {
    crate::{
        record::DeploymentRecord,
        traits::{ContractResolving, Network},
    },
    anyhow::{Context, Result},
    chrono::Utc,
    std::{path::PathBuf, sync::Arc},
};

/// What gets deployed and where the result is recorded.
#[derive(Clone, Debug)]
pub struct Target {
    pub contract: String,
    /// Label written to the record. It is not checked against the chain the
    /// node is connected to.
    pub network: String,
    pub output: PathBuf,
}

pub struct Deployer {
    contracts: Arc<dyn ContractResolving>,
    network: Arc<dyn Network>,
    target: Target,
}

impl Deployer {
    pub fn new(
        contracts: Arc<dyn ContractResolving>,
        network: Arc<dyn Network>,
        target: Target,
    ) -> Self {
        Self {
            contracts,
            network,
            target,
        }
    }

    /// Deploys the target contract exactly once and records the result.
    ///
    /// Steps run strictly in order: resolve the factory, submit the
    /// deployment, wait for confirmation, read the address, write the record.
    /// The first failing step aborts the deployment. Nothing is retried and a
    /// broadcast transaction is left as is, so the record file is only touched
    /// once the contract is confirmed on chain.
    pub async fn deploy(&self) -> Result<DeploymentRecord> {
        let Target {
            contract,
            network,
            output,
        } = &self.target;
        tracing::info!("Deploying {contract} contract...");

        let factory = self
            .contracts
            .resolve(contract)
            .with_context(|| format!("could not resolve factory of {contract}"))?;
        tracing::debug!(
            contract = factory.fully_qualified_name(),
            "resolved contract factory"
        );

        let tx = self.network.submit(&factory).await?;
        tracing::debug!(?tx, "submitted deployment transaction");

        let confirmed = self.network.confirm(tx).await?;
        tracing::debug!(
            ?tx,
            block = ?confirmed.block_number,
            gas_used = confirmed.gas_used,
            "deployment confirmed"
        );

        let address = confirmed.address()?;
        tracing::info!("{} deployed at: {address}", factory.name());

        let record = DeploymentRecord::new(factory.name(), address, network, Utc::now());
        record.write(output)?;
        tracing::info!("Deployment info saved in {}", output.display());

        Ok(record)
    }
}
