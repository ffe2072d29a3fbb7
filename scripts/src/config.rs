//! Command line arguments shared by the binaries.
use alloy::{primitives::Address, transports::http::reqwest::Url};
use clap::{Args, Parser};
use e2e::{Account, Deployer};

/// Address of the ERC-721 collection `mint721` targets by default.
pub const MINT721_CONTRACT_ADDRESS: &str =
    "0x16B8aEC0B12a95d6fcFdB5d68dca41929c7DA7a6";

/// Network and signer configuration.
#[derive(Args, Clone, Debug)]
pub struct NetworkArgs {
    /// RPC endpoint of the chain.
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Url,
    /// Hex-encoded key that signs every transaction.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,
    /// `StylusDeployer` contract that runs constructors on deployment.
    #[arg(long, env = "DEPLOYER_ADDRESS")]
    pub deployer_address: Option<Address>,
}

impl NetworkArgs {
    /// Load the signing account.
    ///
    /// # Errors
    ///
    /// May fail if the private key is malformed.
    pub fn account(&self) -> eyre::Result<Account> {
        Account::from_private_key(&self.private_key, self.rpc_url.clone())
    }

    /// Build a deployer signing with the configured account.
    ///
    /// # Errors
    ///
    /// May fail if the private key is malformed.
    pub fn deployer(&self) -> eyre::Result<Deployer> {
        let deployer = self.account()?.as_deployer();
        Ok(match self.deployer_address {
            Some(address) => deployer.with_deployer_address(address),
            None => deployer,
        })
    }
}

/// Deploy a new `Nft721` collection.
#[derive(Parser, Debug)]
#[command(name = "deploy-nft721", version, about)]
pub struct DeployNft721Args {
    /// Network and signer configuration.
    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Deploy a new `Nft1155` collection owned by the signer.
#[derive(Parser, Debug)]
#[command(name = "deploy-nft1155", version, about)]
pub struct DeployNft1155Args {
    /// Network and signer configuration.
    #[command(flatten)]
    pub network: NetworkArgs,
    /// Metadata URI shared by every token type.
    #[arg(long, env = "NFT1155_URI", default_value = "")]
    pub uri: String,
}

/// Mint a token from an `Nft721` collection to the signer.
#[derive(Parser, Debug)]
#[command(name = "mint721", version, about)]
pub struct Mint721Args {
    /// Network and signer configuration.
    #[command(flatten)]
    pub network: NetworkArgs,
    /// Metadata URI bound to the minted token.
    #[arg(long)]
    pub uri: String,
    /// Collection to mint from.
    #[arg(long, default_value = MINT721_CONTRACT_ADDRESS)]
    pub contract: Address,
}
