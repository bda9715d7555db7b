//! Deployments against a development node (Hardhat or Anvil) listening on
//! `NODE_URL`, by default `http://localhost:8545`.

use {
    alloy::{
        primitives::{Address, Bytes},
        providers::Provider,
    },
    clap::Parser,
    deployer::{arguments::Arguments, record::DeploymentRecord},
    serde_json::json,
    std::{fs, path::Path},
    tempfile::TempDir,
};

/// Creation code of a contract whose runtime code is a single `STOP`.
const BYTECODE: &str = "0x6001600c60003960016000f300";

fn node_url() -> String {
    std::env::var("NODE_URL").unwrap_or_else(|_| "http://localhost:8545".to_string())
}

fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("artifacts/contracts/GuardianChain.sol");
    fs::create_dir_all(&source).unwrap();
    fs::write(
        source.join("GuardianChain.json"),
        json!({
            "_format": "hh-sol-artifact-1",
            "contractName": "GuardianChain",
            "sourceName": "contracts/GuardianChain.sol",
            "abi": [],
            "bytecode": BYTECODE,
            "deployedBytecode": "0x00",
            "linkReferences": {},
            "deployedLinkReferences": {},
        })
        .to_string(),
    )
    .unwrap();
    dir
}

fn arguments(project: &Path, contract: &str) -> Arguments {
    Arguments::try_parse_from([
        "deploy",
        "--node-url",
        node_url().as_str(),
        "--contract",
        contract,
        "--artifacts",
        project.join("artifacts").to_str().unwrap(),
        "--output",
        project.join("deployments.json").to_str().unwrap(),
    ])
    .unwrap()
}

#[tokio::test]
#[ignore]
async fn local_node_deploys_contract() {
    observe::tracing::initialize_reentrant("deployer=debug,ethrpc=trace");
    let project = project();
    let args = arguments(project.path(), "GuardianChain");
    let signer = args.signer().unwrap();

    let record = deployer::run(args).await.unwrap();

    let written: DeploymentRecord =
        serde_json::from_str(&fs::read_to_string(project.path().join("deployments.json")).unwrap())
            .unwrap();
    assert_eq!(written, record);
    assert_eq!(written.contract, "GuardianChain");
    assert_eq!(written.network, "hardhatMainnet");

    let web3 = ethrpc::web3(&node_url().parse().unwrap(), signer, "test");
    let address: Address = written.address.parse().unwrap();
    let code = web3.alloy.get_code_at(address).await.unwrap();
    assert_eq!(code, Bytes::from_static(&[0x00]));
}

#[tokio::test]
#[ignore]
async fn local_node_unknown_contract() {
    observe::tracing::initialize_reentrant("deployer=debug,ethrpc=trace");
    let project = project();

    let result = deployer::run(arguments(project.path(), "Unknown")).await;

    assert!(result.is_err());
    assert!(!project.path().join("deployments.json").exists());
}
