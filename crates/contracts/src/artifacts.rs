use {
    crate::ContractFactory,
    alloy::{json_abi::JsonAbi, primitives::Bytes},
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        ffi::OsStr,
        path::{Path, PathBuf},
    },
    walkdir::WalkDir,
};

/// Hardhat keeps the full compiler input and output here. Nothing in there is
/// a contract artifact.
const BUILD_INFO_DIR: &str = "build-info";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact for contract {name} not found in {}", .root.display())]
    NotFound { name: String, root: PathBuf },
    #[error(
        "multiple artifacts for contract {name}, use one of the fully qualified names: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("could not walk artifacts directory")]
    Walk(#[from] walkdir::Error),
    #[error("could not read artifact {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed artifact {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {} describes contract {found}, not {expected}", .path.display())]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("contract {name} has no bytecode, it is abstract or an interface")]
    MissingBytecode { name: String },
    #[error("contract {name} has malformed bytecode: {reason}")]
    InvalidBytecode { name: String, reason: String },
    #[error(
        "contract {name} needs libraries linked before deployment: {}",
        .libraries.join(", ")
    )]
    UnlinkedLibraries {
        name: String,
        libraries: Vec<String>,
    },
    #[error("constructor of contract {name} takes {count} arguments but none are supplied")]
    ConstructorArguments { name: String, count: usize },
}

/// Compilation output of a Hardhat project (`hh-sol-artifact-1` format).
#[derive(Clone, Debug)]
pub struct Artifacts {
    root: PathBuf,
}

impl Artifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Looks up the factory of a contract. `name` is either a plain contract
    /// name (`GuardianChain`) or a fully qualified one
    /// (`contracts/GuardianChain.sol:GuardianChain`). Plain names have to be
    /// unique across the project.
    pub fn factory(&self, name: &str) -> Result<ContractFactory, ArtifactError> {
        let (path, contract) = match name.rsplit_once(':') {
            Some((source, contract)) => (
                self.root.join(source).join(format!("{contract}.json")),
                contract,
            ),
            None => (self.find(name)?, name),
        };
        if !path.is_file() {
            return Err(ArtifactError::NotFound {
                name: name.to_owned(),
                root: self.root.clone(),
            });
        }

        tracing::debug!(path = %path.display(), "loading contract artifact");
        let json = std::fs::read_to_string(&path).map_err(|source| ArtifactError::Read {
            path: path.clone(),
            source,
        })?;
        let artifact: RawArtifact =
            serde_json::from_str(&json).map_err(|source| ArtifactError::Parse {
                path: path.clone(),
                source,
            })?;
        artifact.into_factory(&path, contract)
    }

    fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let not_found = || ArtifactError::NotFound {
            name: name.to_owned(),
            root: self.root.clone(),
        };
        if !self.root.is_dir() {
            return Err(not_found());
        }

        let file_name = format!("{name}.json");
        let mut matches = Vec::new();
        let entries = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != OsStr::new(BUILD_INFO_DIR));
        for entry in entries {
            let entry = entry?;
            if entry.file_type().is_file() && entry.file_name() == OsStr::new(&file_name) {
                matches.push(entry.into_path());
            }
        }

        match matches.len() {
            0 => Err(not_found()),
            1 => Ok(matches.swap_remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_owned(),
                candidates: matches
                    .iter()
                    .map(|path| self.qualified_name(path, name))
                    .collect(),
            }),
        }
    }

    /// Hardhat stores `<source>:<name>` at `<root>/<source>/<name>.json`.
    fn qualified_name(&self, path: &Path, name: &str) -> String {
        let source = path
            .parent()
            .and_then(|dir| dir.strip_prefix(&self.root).ok())
            .map(|dir| {
                dir.components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default();
        format!("{source}:{name}")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    source_name: String,
    abi: JsonAbi,
    bytecode: String,
    #[serde(default)]
    link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl RawArtifact {
    fn into_factory(self, path: &Path, expected: &str) -> Result<ContractFactory, ArtifactError> {
        if self.contract_name != expected {
            return Err(ArtifactError::NameMismatch {
                path: path.to_owned(),
                expected: expected.to_owned(),
                found: self.contract_name,
            });
        }

        // Unlinked bytecode contains `__$<hash>$__` placeholders and would not
        // parse as hex anyway.
        if !self.link_references.is_empty() {
            return Err(ArtifactError::UnlinkedLibraries {
                libraries: self
                    .link_references
                    .iter()
                    .flat_map(|(source, libraries)| {
                        libraries
                            .keys()
                            .map(move |library| format!("{source}:{library}"))
                    })
                    .collect(),
                name: self.contract_name,
            });
        }

        let bytecode: Bytes = match self.bytecode.parse() {
            Ok(bytecode) => bytecode,
            Err(err) => {
                return Err(ArtifactError::InvalidBytecode {
                    name: self.contract_name,
                    reason: err.to_string(),
                });
            }
        };
        if bytecode.is_empty() {
            return Err(ArtifactError::MissingBytecode {
                name: self.contract_name,
            });
        }

        let arguments = self
            .abi
            .constructor
            .as_ref()
            .map_or(0, |constructor| constructor.inputs.len());
        if arguments > 0 {
            return Err(ArtifactError::ConstructorArguments {
                name: self.contract_name,
                count: arguments,
            });
        }

        Ok(ContractFactory::new(
            self.contract_name,
            self.source_name,
            self.abi,
            bytecode,
        ))
    }
}
