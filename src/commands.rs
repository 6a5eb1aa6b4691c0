//! Implementations of the deploy scripts

use ethers::providers::Middleware;
use tracing::info;

use crate::{
    errors::ScriptError,
    escrows::EscrowSetup,
    manifest::{addresses_path, AddressManifest},
    types::{EscrowAddresses, NetworkContext},
};

/// Deploy both escrow implementations and record their addresses in the
/// network's addresses manifest.
///
/// The manifest must already exist for the resolved network; nothing is
/// written to it unless both deployments succeed.
pub async fn deploy_escrows<M: Middleware>(
    ctx: &NetworkContext<M>,
    setup: &impl EscrowSetup,
    deployments_dir: &str,
) -> Result<(), ScriptError> {
    info!(
        network = %ctx.network_name,
        deployer = %format!("{:#x}", ctx.deployer_address),
        "deploying escrow implementations"
    );

    let manifest_path = addresses_path(deployments_dir, &ctx.network_name);
    let mut manifest = AddressManifest::load(&manifest_path)?;

    // The deployments share a signer, so they are submitted strictly in
    // sequence to keep nonce assignment in order
    let native = setup.escrow_native_setup(false).await?;
    let token = setup.escrow_token_setup(false).await?;

    manifest.set_escrows(&EscrowAddresses { native, token });
    manifest.persist()?;

    info!(
        native = %format!("{native:#x}"),
        token = %format!("{token:#x}"),
        "escrow implementation addresses recorded"
    );

    Ok(())
}
