pub mod alloy;

use {
    ::alloy::{primitives::Address, providers::DynProvider, signers::local::PrivateKeySigner},
    url::Url,
};

pub type AlloyProvider = DynProvider;

/// Connection to a node whose transactions get signed by a local wallet.
#[derive(Debug, Clone)]
pub struct Web3 {
    pub alloy: AlloyProvider,
    /// Address of the wallet's default signer. Transactions sent through
    /// [`Web3::alloy`] without an explicit `from` are signed by it.
    pub signer: Address,
}

/// Create a Web3 instance that signs with `signer`. `label` tags the RPC
/// requests in the logs.
pub fn web3(url: &Url, signer: PrivateKeySigner, label: &str) -> Web3 {
    let address = signer.address();
    Web3 {
        alloy: crate::alloy::provider_with_signer(url, signer, label),
        signer: address,
    }
}
