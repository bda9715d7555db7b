use alloy::{json_abi::JsonAbi, primitives::Bytes};

/// Everything needed to create a new instance of a contract on chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractFactory {
    name: String,
    source: String,
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractFactory {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        abi: JsonAbi,
        bytecode: Bytes,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            abi,
            bytecode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source file the contract was compiled from, relative to the project
    /// root (e.g. `contracts/GuardianChain.sol`).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// `<source>:<name>`, the form Hardhat accepts to disambiguate contracts
    /// with the same name.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source, self.name)
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation code. Sent as the input of the deployment transaction.
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }
}
