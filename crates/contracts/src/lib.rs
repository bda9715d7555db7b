//! Deployable contracts described by the compilation artifacts of a Hardhat
//! project.
mod artifacts;
mod factory;

pub use {
    artifacts::{ArtifactError, Artifacts},
    factory::ContractFactory,
};

/// Directory Hardhat writes its compilation output to by default.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
