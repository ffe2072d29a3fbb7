//! Deploys a new `Nft1155` collection owned by the signer and prints its
//! address.
use nft_scripts::{
    config::DeployNft1155Args,
    deploy::{deploy, nft1155_constructor, Collection},
    init_tracing, parse_args,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let args: DeployNft1155Args = parse_args()
        .inspect_err(|e| tracing::error!(error = %e, "invalid arguments"))?;
    let owner = args.network.account()?.address();
    let deployer = args.network.deployer()?;
    let constructor = nft1155_constructor(&args.uri, owner);

    let deployed = deploy(deployer, Collection::Nft1155, constructor)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "deployment failed"))?;

    println!("{deployed}");
    Ok(())
}
