//! Definitions of CLI arguments and commands for the deploy scripts

use clap::{Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::deploy_escrows, errors::ScriptError, escrows::OnchainEscrowSetup,
    types::NetworkContext,
};

/// Deployment scripts for the escrow contracts
#[derive(Parser)]
pub struct Cli {
    /// Private keys of the signing accounts available to the scripts,
    /// comma-separated. The first key is the auxiliary dev account, the
    /// second the deploying account.
    // TODO: Better key management
    #[arg(short, long, env = "PRIV_KEYS", value_delimiter = ',')]
    pub priv_keys: Vec<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Directory holding the per-network address manifests
    #[arg(short, long, default_value = "./deployments")]
    pub deployments_dir: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts exposed by this crate
#[derive(Subcommand)]
pub enum Command {
    /// Deploy both escrow implementations and record their addresses in the
    /// network's addresses manifest
    DeployEscrows,
}

impl Command {
    /// Run the command against the resolved network context
    pub async fn run(
        self,
        ctx: NetworkContext<impl Middleware>,
        deployments_dir: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployEscrows => {
                let setup = OnchainEscrowSetup::new(ctx.client.clone(), ctx.deployer_address);
                deploy_escrows(&ctx, &setup, deployments_dir).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    /// The clap argument definitions are internally consistent
    #[test]
    fn cli_arguments_are_well_formed() {
        Cli::command().debug_assert();
    }
}
