use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    chrono::{DateTime, SecondsFormat, Utc},
    serde::{Deserialize, Serialize},
    std::{
        fs::{self, Permissions},
        io::Write,
        path::Path,
    },
};

/// Summary of a completed deployment, persisted next to the project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub contract: String,
    /// EIP-55 checksummed.
    pub address: String,
    pub network: String,
    /// UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`.
    pub timestamp: String,
}

impl DeploymentRecord {
    pub fn new(
        contract: impl Into<String>,
        address: Address,
        network: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            contract: contract.into(),
            address: address.to_checksum(None),
            network: network.into(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Replaces the content of `path` with the indented JSON of the record.
    /// The file is swapped in atomically so readers never observe a partially
    /// written record. An existing file keeps its permissions, a new one is
    /// created like any other regular file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        if let Some(permissions) = new_file_permissions() {
            builder.permissions(permissions);
        }
        let mut file = builder
            .tempfile_in(dir)
            .with_context(|| format!("could not create temporary file in {}", dir.display()))?;
        if let Ok(metadata) = fs::metadata(path) {
            file.as_file()
                .set_permissions(metadata.permissions())
                .with_context(|| format!("could not copy permissions of {}", path.display()))?;
        }
        file.write_all(json.as_bytes())?;
        file.persist(path)
            .with_context(|| format!("could not write {}", path.display()))?;
        Ok(())
    }
}

/// `rw-r--r--` before the umask is applied. Temporary files are owner-only
/// by default.
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
