//! Mints a token with the given metadata URI from an `Nft721` collection and
//! prints the receipt.
use nft_scripts::{
    config::Mint721Args,
    init_tracing,
    mint::{mint, token_id},
    parse_args,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let args: Mint721Args = parse_args()
        .inspect_err(|e| tracing::error!(error = %e, "invalid arguments"))?;
    let account = args.network.account()?;

    let receipt = mint(&account, args.contract, args.uri)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "mint failed"))?;
    println!("{receipt:#?}");

    let token_id = token_id(&receipt, account.address())?;
    println!("minted token id: {token_id}");
    Ok(())
}
