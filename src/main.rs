use clap::Parser;
use escrow_scripts::{cli::Cli, errors::ScriptError, utils::setup_context};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_keys,
        rpc_url,
        deployments_dir,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let ctx = setup_context(&priv_keys, &rpc_url).await?;

    command.run(ctx, &deployments_dir).await
}
