use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::WrapErr;

/// Environment variable holding the RPC endpoint of the node.
pub const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";

/// Environment variable holding the address of the `StylusDeployer`
/// contract used to run constructors at deployment time.
pub const DEPLOYER_ADDRESS_ENV_VAR_NAME: &str = "DEPLOYER_ADDRESS";

/// Convenience type alias that represents an Ethereum wallet: an `alloy`
/// provider with the recommended fillers and a `WalletFiller`.
pub type Wallet = DynProvider;

/// Load the `name` environment variable.
///
/// # Errors
///
/// May fail if the variable is not set or is not valid unicode.
pub fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Build a [`Wallet`] that signs with `signer` and talks to `rpc_url`.
pub fn provider(signer: PrivateKeySigner, rpc_url: Url) -> Wallet {
    ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(rpc_url)
        .erased()
}
