//! Utilities for the deploy scripts

use std::{str::FromStr, sync::Arc};

use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use tracing::info;

use crate::{
    constants::{
        AVALANCHE_CHAIN_ID, AVALANCHE_NETWORK_NAME, FUJI_CHAIN_ID, FUJI_NETWORK_NAME,
        LOCAL_CHAIN_ID, LOCAL_NETWORK_NAME, MIN_SIGNING_KEYS,
    },
    errors::ScriptError,
    types::NetworkContext,
};

/// Resolve the network and signer context for a deployment run.
///
/// At least [`MIN_SIGNING_KEYS`] private keys must be configured: the first
/// is the auxiliary dev account, the second the deploying account. The chain
/// id is queried from the RPC endpoint and fixes both the signer binding and
/// the network's manifest directory name.
pub async fn setup_context(
    priv_keys: &[String],
    rpc_url: &str,
) -> Result<NetworkContext<impl Middleware>, ScriptError> {
    if priv_keys.len() < MIN_SIGNING_KEYS {
        return Err(ScriptError::Configuration(format!(
            "expected at least {} signing keys, got {}",
            MIN_SIGNING_KEYS,
            priv_keys.len()
        )));
    }

    let dev_wallet = LocalWallet::from_str(&priv_keys[0])
        .map_err(|e| ScriptError::Configuration(e.to_string()))?;
    let deployer_wallet = LocalWallet::from_str(&priv_keys[1])
        .map_err(|e| ScriptError::Configuration(e.to_string()))?;

    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
        .as_u64();

    let deployer_address = deployer_wallet.address();
    let client = Arc::new(SignerMiddleware::new(
        provider,
        deployer_wallet.with_chain_id(chain_id),
    ));

    let network_name = network_name(chain_id);
    info!(network = %network_name, chain_id, "resolved network context");

    Ok(NetworkContext {
        network_name,
        chain_id,
        dev_address: dev_wallet.address(),
        deployer_address,
        client,
    })
}

/// The manifest directory name identifying the network with the given chain id
pub fn network_name(chain_id: u64) -> String {
    match chain_id {
        AVALANCHE_CHAIN_ID => AVALANCHE_NETWORK_NAME.to_string(),
        FUJI_CHAIN_ID => FUJI_NETWORK_NAME.to_string(),
        LOCAL_CHAIN_ID => LOCAL_NETWORK_NAME.to_string(),
        _ => format!("chain-{chain_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{network_name, setup_context};
    use crate::errors::ScriptError;

    /// A well-formed but throwaway private key
    const TEST_KEY: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// Fewer than two signing keys is a configuration error, raised before
    /// any RPC traffic
    #[tokio::test]
    async fn fewer_than_two_keys_is_a_configuration_error() {
        let keys = vec![TEST_KEY.to_string()];
        let err = setup_context(&keys, "http://localhost:8545")
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::Configuration(_)));
    }

    /// An unparseable signing key is a configuration error
    #[tokio::test]
    async fn unparseable_key_is_a_configuration_error() {
        let keys = vec!["not-a-key".to_string(), TEST_KEY.to_string()];
        let err = setup_context(&keys, "http://localhost:8545")
            .await
            .unwrap_err();
        assert!(matches!(err, ScriptError::Configuration(_)));
    }

    /// Known chain ids map to their manifest directory names, unknown ones
    /// fall back to a chain-id-keyed name
    #[test]
    fn chain_ids_map_to_network_names() {
        assert_eq!(network_name(43114), "avalanche");
        assert_eq!(network_name(43113), "fuji");
        assert_eq!(network_name(31337), "localhost");
        assert_eq!(network_name(5), "chain-5");
    }
}
