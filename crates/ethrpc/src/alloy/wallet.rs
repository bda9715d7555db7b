use {
    alloy::signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    anyhow::{Context, Result},
};

/// Mnemonic of the prefunded accounts of local Hardhat and Anvil nodes.
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Parses a hex encoded secp256k1 private key, with or without `0x` prefix.
pub fn signer_from_private_key(key: &str) -> Result<PrivateKeySigner> {
    key.trim()
        .parse()
        .context("private key is not a valid hex encoded secp256k1 key")
}

/// Derives the signer at `index` of the default Ethereum derivation path
/// (`m/44'/60'/0'/0/{index}`).
pub fn signer_from_mnemonic(phrase: &str, index: u32) -> Result<PrivateKeySigner> {
    MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .index(index)
        .context("invalid derivation index")?
        .build()
        .context("could not derive signer from mnemonic")
}

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address};

    #[test]
    fn derives_hardhat_accounts() {
        let first = signer_from_mnemonic(TEST_MNEMONIC, 0).unwrap();
        assert_eq!(
            first.address(),
            address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );

        let second = signer_from_mnemonic(TEST_MNEMONIC, 1).unwrap();
        assert_eq!(
            second.address(),
            address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn parses_private_keys_with_and_without_prefix() {
        let key = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        let expected = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

        assert_eq!(signer_from_private_key(key).unwrap().address(), expected);
        assert_eq!(
            signer_from_private_key(&format!("0x{key}\n")).unwrap().address(),
            expected
        );
    }

    #[test]
    fn rejects_malformed_private_keys() {
        assert!(signer_from_private_key("0x1234").is_err());
        assert!(signer_from_private_key("not a key").is_err());
    }
}
