//! Setup routines for the two escrow contract implementations.
//!
//! Each routine deploys one escrow variant for the given deploying account,
//! either as a bare implementation or as an initialized proxy instance. The
//! deployment step only ever asks for bare implementations; instances are
//! what the test suites and per-deal tooling stand up.

use std::sync::Arc;

use alloy_primitives::Address as AlloyAddress;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use ethers::{
    abi::{Abi, Address, Tokenize},
    contract::ContractFactory,
    providers::Middleware,
    types::Bytes,
};

use crate::{
    constants::{ERC1967_PROXY_ABI, ERC1967_PROXY_BYTECODE, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    solidity::initializeCall,
    types::EscrowVariant,
};

/// The escrow implementation setup routines, one per variant.
///
/// `as_instance` selects between deploying the bare implementation contract
/// (`false`) and deploying an initialized proxy instance routed at a fresh
/// implementation (`true`). Both return the address later steps should record
/// or interact with.
#[async_trait]
pub trait EscrowSetup {
    /// Deploy the native-asset escrow variant
    async fn escrow_native_setup(&self, as_instance: bool) -> Result<Address, ScriptError>;

    /// Deploy the token escrow variant
    async fn escrow_token_setup(&self, as_instance: bool) -> Result<Address, ScriptError>;
}

/// Escrow setup against a live chain through an RPC client
pub struct OnchainEscrowSetup<M> {
    /// The RPC client used to submit deployment transactions
    client: Arc<M>,
    /// The deploying account, also the owner of initialized instances
    deployer: Address,
}

impl<M: Middleware> OnchainEscrowSetup<M> {
    /// Construct the setup routines over the given client and deployer
    pub fn new(client: Arc<M>, deployer: Address) -> Self {
        OnchainEscrowSetup { client, deployer }
    }

    /// Deploy one escrow variant, optionally wrapped in an initialized proxy
    async fn deploy(
        &self,
        variant: EscrowVariant,
        as_instance: bool,
    ) -> Result<Address, ScriptError> {
        let implementation = self
            .deploy_artifact(variant, variant.abi(), variant.bytecode(), ())
            .await?;

        if !as_instance {
            return Ok(implementation);
        }

        // Instances run behind an ERC1967 proxy initialized to the deployer
        let owner = AlloyAddress::from_slice(self.deployer.as_bytes());
        let initialize_calldata = initializeCall { owner }.abi_encode();

        self.deploy_artifact(
            variant,
            ERC1967_PROXY_ABI,
            ERC1967_PROXY_BYTECODE,
            (implementation, Bytes::from(initialize_calldata)),
        )
        .await
    }

    /// Deploy a contract from its embedded ABI & bytecode artifacts
    async fn deploy_artifact<T: Tokenize>(
        &self,
        variant: EscrowVariant,
        abi: &str,
        bytecode: &str,
        constructor_args: T,
    ) -> Result<Address, ScriptError> {
        let abi: Abi =
            serde_json::from_str(abi).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        let bytecode = Bytes::from(
            hex::decode(bytecode.trim())
                .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?,
        );

        let factory = ContractFactory::new(abi, bytecode, self.client.clone());
        let contract = factory
            .deploy(constructor_args)
            .map_err(|e| ScriptError::Deployment(variant, e.to_string()))?
            .confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .send()
            .await
            .map_err(|e| ScriptError::Deployment(variant, e.to_string()))?;

        Ok(contract.address())
    }
}

#[async_trait]
impl<M: Middleware> EscrowSetup for OnchainEscrowSetup<M> {
    async fn escrow_native_setup(&self, as_instance: bool) -> Result<Address, ScriptError> {
        self.deploy(EscrowVariant::Native, as_instance).await
    }

    async fn escrow_token_setup(&self, as_instance: bool) -> Result<Address, ScriptError> {
        self.deploy(EscrowVariant::Token, as_instance).await
    }
}

#[cfg(test)]
mod tests {
    use ethers::abi::Abi;

    use crate::{
        constants::{ERC1967_PROXY_ABI, ERC1967_PROXY_BYTECODE},
        solidity::initializeCall,
        types::EscrowVariant,
    };
    use alloy_primitives::Address as AlloyAddress;
    use alloy_sol_types::SolCall;

    /// Every embedded escrow artifact parses as an ABI and decodes as bytecode
    #[test]
    fn escrow_artifacts_are_well_formed() {
        for variant in [EscrowVariant::Native, EscrowVariant::Token] {
            serde_json::from_str::<Abi>(variant.abi()).unwrap();
            assert!(!hex::decode(variant.bytecode().trim()).unwrap().is_empty());
        }
    }

    /// The proxy artifact parses as an ABI and decodes as bytecode
    #[test]
    fn proxy_artifact_is_well_formed() {
        serde_json::from_str::<Abi>(ERC1967_PROXY_ABI).unwrap();
        assert!(!hex::decode(ERC1967_PROXY_BYTECODE.trim()).unwrap().is_empty());
    }

    /// The instance initializer encodes as `initialize(address)` calldata
    #[test]
    fn initialize_calldata_shape() {
        let owner = AlloyAddress::repeat_byte(0xab);
        let calldata = initializeCall { owner }.abi_encode();

        assert_eq!(calldata.len(), 36);
        assert_eq!(&calldata[..4], &initializeCall::SELECTOR[..]);
    }
}
