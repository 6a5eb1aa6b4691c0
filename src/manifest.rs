//! The per-network manifest of deployed contract addresses.
//!
//! Each network has a single `addresses.json` recording the contracts deployed
//! to it; later deployment steps and client tooling read addresses out of it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use json::JsonValue;

use crate::{
    constants::{ADDRESSES_FILE_NAME, ESCROWS_KEY, ESCROW_NATIVE_KEY, ESCROW_TOKEN_KEY},
    errors::ScriptError,
    types::EscrowAddresses,
};

/// The path of the addresses manifest for the given network
pub fn addresses_path(deployments_dir: &str, network_name: &str) -> PathBuf {
    Path::new(deployments_dir)
        .join(network_name)
        .join(ADDRESSES_FILE_NAME)
}

/// An addresses manifest held in memory between load and persist.
///
/// The manifest is strictly read-modify-write: top-level keys other than the
/// ones written by the running script survive the rewrite untouched. The raw
/// file contents seen at load time are kept alongside the parsed document so
/// that a concurrent rewrite of the file is detected before persisting rather
/// than silently overwritten.
#[derive(Debug)]
pub struct AddressManifest {
    /// The path of the manifest file
    path: PathBuf,
    /// The parsed manifest document
    document: JsonValue,
    /// The raw file contents at load time
    snapshot: String,
}

impl AddressManifest {
    /// Load the manifest at `path`.
    ///
    /// The file must already exist and hold a top-level JSON object; a manifest
    /// is never created from scratch here.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let snapshot = fs::read_to_string(path)
            .map_err(|e| ScriptError::ReadManifest(format!("{}: {}", path.display(), e)))?;

        let document = json::parse(&snapshot)
            .map_err(|e| ScriptError::ParseManifest(format!("{}: {}", path.display(), e)))?;
        if !document.is_object() {
            return Err(ScriptError::ParseManifest(format!(
                "{}: expected a top-level JSON object",
                path.display()
            )));
        }

        Ok(AddressManifest {
            path: path.to_path_buf(),
            document,
            snapshot,
        })
    }

    /// Record the deployed escrow implementation addresses under the `escrows`
    /// key, replacing any prior value at that key wholesale
    pub fn set_escrows(&mut self, addresses: &EscrowAddresses) {
        let mut escrows = JsonValue::new_object();
        escrows[ESCROW_NATIVE_KEY] = JsonValue::String(format!("{:#x}", addresses.native));
        escrows[ESCROW_TOKEN_KEY] = JsonValue::String(format!("{:#x}", addresses.token));

        self.document[ESCROWS_KEY] = escrows;
    }

    /// Overwrite the manifest file with the updated document, compactly
    /// serialized.
    ///
    /// Fails without writing if the file no longer matches the contents seen
    /// at load time: a mismatch means another writer touched the manifest
    /// while this run was deploying.
    pub fn persist(&self) -> Result<(), ScriptError> {
        let current = fs::read_to_string(&self.path)
            .map_err(|e| ScriptError::ManifestConflict(format!("{}: {}", self.path.display(), e)))?;
        if current != self.snapshot {
            return Err(ScriptError::ManifestConflict(format!(
                "{}: file changed since it was loaded",
                self.path.display()
            )));
        }

        fs::write(&self.path, self.document.dump())
            .map_err(|e| ScriptError::WriteManifest(format!("{}: {}", self.path.display(), e)))
    }
}
