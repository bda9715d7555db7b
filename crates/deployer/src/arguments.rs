use {
    alloy::signers::local::PrivateKeySigner,
    anyhow::Result,
    ethrpc::alloy::wallet,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
        time::Duration,
    },
    tracing::level_filters::LevelFilter,
    url::Url,
};

#[derive(clap::Parser)]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Hex encoded private key of the deploying account. Takes precedence
    /// over the mnemonic.
    #[clap(long, env)]
    pub private_key: Option<String>,

    /// Mnemonic the deploying account gets derived from when no private key
    /// is configured. Defaults to the mnemonic of the prefunded accounts of
    /// local development nodes.
    #[clap(long, env, default_value = wallet::TEST_MNEMONIC)]
    pub mnemonic: String,

    /// Derivation index of the deploying account within the mnemonic.
    #[clap(long, env, default_value = "0")]
    pub account_index: u32,

    /// Name of the contract to deploy. Either plain (`GuardianChain`) or fully
    /// qualified (`contracts/GuardianChain.sol:GuardianChain`).
    #[clap(long, env, default_value = "GuardianChain")]
    pub contract: String,

    /// Directory containing the compiled Hardhat artifacts.
    #[clap(long, env, default_value = contracts::DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Network name written to the deployment record.
    #[clap(long, env, default_value = "hardhatMainnet")]
    pub network_label: String,

    /// File the deployment record gets written to. Existing content is
    /// replaced.
    #[clap(long, env, default_value = "deployments.json")]
    pub output: PathBuf,

    /// Number of confirmations to wait for before the deployment counts as
    /// successful.
    #[clap(long, env, default_value = "1")]
    pub confirmations: u64,

    /// Give up waiting for the confirmation after this long. Waits forever if
    /// unset.
    #[clap(long, env, value_parser = humantime::parse_duration)]
    pub confirmation_timeout: Option<Duration>,
}

impl Arguments {
    /// Account the deployment transaction is signed with.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        match &self.private_key {
            Some(key) => wallet::signer_from_private_key(key),
            None => wallet::signer_from_mnemonic(&self.mnemonic, self.account_index),
        }
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            node_url,
            private_key,
            mnemonic: _,
            account_index,
            contract,
            artifacts,
            network_label,
            output,
            confirmations,
            confirmation_timeout,
        } = self;

        write!(f, "{logging}")?;
        writeln!(f, "node_url: {node_url}")?;
        display_secret_option(f, "private_key", private_key)?;
        writeln!(f, "mnemonic: SECRET")?;
        writeln!(f, "account_index: {account_index}")?;
        writeln!(f, "contract: {contract}")?;
        writeln!(f, "artifacts: {}", artifacts.display())?;
        writeln!(f, "network_label: {network_label}")?;
        writeln!(f, "output: {}", output.display())?;
        writeln!(f, "confirmations: {confirmations}")?;
        writeln!(f, "confirmation_timeout: {confirmation_timeout:?}")?;
        Ok(())
    }
}

#[derive(clap::Parser)]
#[group(skip)]
pub struct LoggingArguments {
    #[clap(
        long,
        env,
        default_value = "warn,deployer=info,ethrpc=info,contracts=info"
    )]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// Emit log lines as JSON objects.
    #[clap(long, env)]
    pub use_json_logs: bool,
}

impl LoggingArguments {
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(
            &self.log_filter,
            self.log_stderr_threshold,
            self.use_json_logs,
        )
    }
}

impl Display for LoggingArguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            use_json_logs,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        Ok(())
    }
}

fn display_secret_option<T>(f: &mut Formatter<'_>, name: &str, option: &Option<T>) -> fmt::Result {
    match option {
        Some(_) => writeln!(f, "{name}: SECRET"),
        None => writeln!(f, "{name}: None"),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address, clap::Parser};

    #[test]
    fn defaults_target_local_node() {
        let args = Arguments::try_parse_from(["deploy"]).unwrap();

        assert_eq!(args.contract, "GuardianChain");
        assert_eq!(args.network_label, "hardhatMainnet");
        assert_eq!(args.output, PathBuf::from("deployments.json"));
        assert_eq!(args.artifacts, PathBuf::from("artifacts"));
        assert_eq!(args.confirmations, 1);
        assert_eq!(args.confirmation_timeout, None);
        assert_eq!(
            args.signer().unwrap().address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn private_key_takes_precedence() {
        let args = Arguments::try_parse_from([
            "deploy",
            "--private-key",
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
            "--account-index",
            "3",
            "--confirmation-timeout",
            "2m",
        ])
        .unwrap();

        assert_eq!(
            args.signer().unwrap().address(),
            address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
        assert_eq!(args.confirmation_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn display_hides_secrets() {
        let args = Arguments::try_parse_from([
            "deploy",
            "--private-key",
            "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        ])
        .unwrap();
        let shown = args.to_string();

        assert!(shown.contains("private_key: SECRET"));
        assert!(shown.contains("mnemonic: SECRET"));
        assert!(!shown.contains("59c6995e"));
        assert!(!shown.contains(wallet::TEST_MNEMONIC));
    }
}
