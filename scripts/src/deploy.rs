//! Publishing new collections with `cargo stylus deploy`.
use std::{fmt, path::Path};

use alloy::primitives::Address;
use e2e::{constructor, Constructor, Deployer, ReceiptExt};
use eyre::WrapErr;

/// Name of the collection deployed by `deploy-nft721`.
pub const NFT721_NAME: &str = "NFT721";
/// Symbol of the collection deployed by `deploy-nft721`.
pub const NFT721_SYMBOL: &str = "NFT";

/// A contract crate of this workspace that can be deployed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    /// The open-mint ERC-721 collection.
    Nft721,
    /// The owner-minted ERC-1155 collection.
    Nft1155,
}

impl Collection {
    /// Directory of the contract crate's manifest.
    #[must_use]
    pub fn manifest_dir(self) -> &'static Path {
        let dir = match self {
            Self::Nft721 => {
                concat!(env!("CARGO_MANIFEST_DIR"), "/../contracts/nft721")
            }
            Self::Nft1155 => {
                concat!(env!("CARGO_MANIFEST_DIR"), "/../contracts/nft1155")
            }
        };
        Path::new(dir)
    }

    /// Label printed in front of the deployed address.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nft721 => "NFT",
            Self::Nft1155 => "NFT1155",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nft721 => f.write_str("nft721"),
            Self::Nft1155 => f.write_str("nft1155"),
        }
    }
}

/// Address of a freshly deployed collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployed {
    /// Which collection was deployed.
    pub collection: Collection,
    /// Where it lives.
    pub address: Address,
}

impl fmt::Display for Deployed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deployed to: {}", self.collection.label(), self.address)
    }
}

/// Constructor arguments of an `Nft721` collection.
#[must_use]
pub fn nft721_constructor() -> Constructor {
    constructor!(NFT721_NAME, NFT721_SYMBOL)
}

/// Constructor arguments of an `Nft1155` collection minted by `owner`.
#[must_use]
pub fn nft1155_constructor(uri: &str, owner: Address) -> Constructor {
    constructor!(uri, owner)
}

/// Deploy `collection`, running `constructor` on it.
///
/// Every call creates a new, independent instance.
///
/// # Errors
///
/// May fail if `cargo stylus deploy` fails or the constructor reverts.
pub async fn deploy(
    deployer: Deployer,
    collection: Collection,
    constructor: Constructor,
) -> eyre::Result<Deployed> {
    tracing::info!(
        %collection,
        signature = %constructor.signature,
        "deploying"
    );

    let deployment = deployer
        .in_dir(collection.manifest_dir())
        .with_constructor(constructor)
        .deploy()
        .await
        .wrap_err(format!("failed to deploy {collection}"))?;

    let address = deployment.address()?;
    tracing::info!(
        %collection,
        %address,
        tx_hash = %deployment.receipt.transaction_hash,
        "deployed"
    );

    Ok(Deployed { collection, address })
}
