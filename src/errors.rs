//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::types::EscrowVariant;

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Missing or invalid signing-account configuration
    Configuration(String),
    /// Error reading the addresses manifest
    ReadManifest(String),
    /// Error parsing the addresses manifest
    ParseManifest(String),
    /// Error parsing an embedded contract artifact
    ArtifactParsing(String),
    /// Error deploying an escrow contract
    Deployment(EscrowVariant, String),
    /// The addresses manifest changed on disk between load and persist
    ManifestConflict(String),
    /// Error writing the addresses manifest
    WriteManifest(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::Configuration(s) => write!(f, "configuration error: {}", s),
            ScriptError::ReadManifest(s) => write!(f, "error reading addresses manifest: {}", s),
            ScriptError::ParseManifest(s) => write!(f, "error parsing addresses manifest: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::Deployment(variant, s) => {
                write!(f, "error deploying {}: {}", variant, s)
            }
            ScriptError::ManifestConflict(s) => {
                write!(f, "addresses manifest conflict: {}", s)
            }
            ScriptError::WriteManifest(s) => write!(f, "error writing addresses manifest: {}", s),
        }
    }
}

impl Error for ScriptError {}
