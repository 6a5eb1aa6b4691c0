//! Type definitions used throughout the scripts

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use ethers::abi::Address;

use crate::constants::{
    ESCROW_NATIVE_ABI, ESCROW_NATIVE_BYTECODE, ESCROW_TOKEN_ABI, ESCROW_TOKEN_BYTECODE,
};

/// The escrow contract variants this project deploys
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EscrowVariant {
    /// Escrow over the chain's native asset
    Native,
    /// Escrow over a fungible token
    Token,
}

impl EscrowVariant {
    /// The ABI of the variant's implementation contract
    pub fn abi(self) -> &'static str {
        match self {
            EscrowVariant::Native => ESCROW_NATIVE_ABI,
            EscrowVariant::Token => ESCROW_TOKEN_ABI,
        }
    }

    /// The deployment bytecode of the variant's implementation contract
    pub fn bytecode(self) -> &'static str {
        match self {
            EscrowVariant::Native => ESCROW_NATIVE_BYTECODE,
            EscrowVariant::Token => ESCROW_TOKEN_BYTECODE,
        }
    }
}

impl Display for EscrowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscrowVariant::Native => write!(f, "escrow-native"),
            EscrowVariant::Token => write!(f, "escrow-token"),
        }
    }
}

/// The resolved network and signer context for a deployment run.
///
/// Resolved once at startup, immutable for the run's duration.
#[derive(Debug)]
pub struct NetworkContext<M> {
    /// The identifying name of the active network, used to key the manifest path
    pub network_name: String,
    /// The chain id reported by the RPC endpoint
    pub chain_id: u64,
    /// The auxiliary dev account, unused by the deploy scripts themselves
    pub dev_address: Address,
    /// The account submitting the deployment transactions
    pub deployer_address: Address,
    /// The RPC client bound to the deploying account
    pub client: Arc<M>,
}

/// The deployed escrow implementation addresses recorded in the manifest
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EscrowAddresses {
    /// The address of the native-asset escrow implementation
    pub native: Address,
    /// The address of the token escrow implementation
    pub token: Address,
}

#[cfg(test)]
mod tests {
    use super::EscrowVariant;

    /// The variant display names double as log labels, keep them stable
    #[test]
    fn variant_display_names() {
        assert_eq!(EscrowVariant::Native.to_string(), "escrow-native");
        assert_eq!(EscrowVariant::Token.to_string(), "escrow-token");
    }
}
