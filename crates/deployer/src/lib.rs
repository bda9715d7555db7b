pub mod arguments;
pub mod chain;
pub mod deployment;
pub mod record;
pub mod traits;

use {
    crate::{
        chain::Chain,
        deployment::{Deployer, Target},
        record::DeploymentRecord,
    },
    anyhow::Result,
    contracts::Artifacts,
    std::{process::ExitCode, sync::Arc},
};

#[cfg(test)]
mod test_logs;

/// Connects to the configured node and deploys the configured contract once.
pub async fn run(args: arguments::Arguments) -> Result<DeploymentRecord> {
    let signer = args.signer()?;
    let web3 = ethrpc::web3(&args.node_url, signer, "deployer");
    let deployer = Deployer::new(
        Arc::new(Artifacts::new(args.artifacts)),
        Arc::new(Chain::new(
            web3,
            args.confirmations,
            args.confirmation_timeout,
        )),
        Target {
            contract: args.contract,
            network: args.network_label,
            output: args.output,
        },
    );
    deployer.deploy().await
}

/// Logs the outcome of a deployment and maps it to the process exit code.
pub fn report(result: &Result<DeploymentRecord>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Deployment failed: {err:?}");
            ExitCode::FAILURE
        }
    }
}
