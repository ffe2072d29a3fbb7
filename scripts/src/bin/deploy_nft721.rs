//! Deploys a new `Nft721` collection named `NFT721` and prints its address.
use nft_scripts::{
    config::DeployNft721Args,
    deploy::{deploy, nft721_constructor, Collection},
    init_tracing, parse_args,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let args: DeployNft721Args = parse_args()
        .inspect_err(|e| tracing::error!(error = %e, "invalid arguments"))?;
    let deployer = args.network.deployer()?;

    let deployed = deploy(deployer, Collection::Nft721, nft721_constructor())
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "deployment failed"))?;

    println!("{deployed}");
    Ok(())
}
