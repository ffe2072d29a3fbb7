use std::str::FromStr;

use alloy::{
    network::TransactionBuilder,
    primitives::{uint, Address, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::WrapErr;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    deploy::Deployer,
    system::{env, provider, Wallet, RPC_URL_ENV_VAR_NAME},
};

/// Pre-funded key of the Nitro dev node.
const MASTER_PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
const DEFAULT_FUNDING_ETH: U256 = uint!(100_000_000_000_000_000_U256);

/// An externally owned account able to sign and send transactions.
#[derive(Clone)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider with a `WalletFiller`.
    pub wallet: Wallet,
    url: Url,
}

impl Account {
    /// Create a new account funded with [`DEFAULT_FUNDING_ETH`] from the
    /// node's master key.
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is missing or funding the account fails.
    pub async fn new() -> eyre::Result<Self> {
        AccountFactory::create().await
    }

    /// Load an existing account from a hex-encoded `private_key`.
    ///
    /// # Errors
    ///
    /// May fail if `private_key` is not a valid secp256k1 key.
    pub fn from_private_key(private_key: &str, url: Url) -> eyre::Result<Self> {
        let signer = PrivateKeySigner::from_str(private_key)
            .wrap_err("failed to parse private key")?;
        Ok(Self::from_signer(signer, url))
    }

    fn from_signer(signer: PrivateKeySigner, url: Url) -> Self {
        let wallet = provider(signer.clone(), url.clone());
        Self { signer, wallet, url }
    }

    /// Get a hex-encoded String representing this account's private key.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode(self.signer.to_bytes())
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Create a configurable smart contract deployer on behalf of this
    /// account.
    #[must_use]
    pub fn as_deployer(&self) -> Deployer {
        Deployer::new(self.url.to_string(), self.pk())
    }

    /// Send `value` of gas token to `to` and wait for inclusion.
    ///
    /// # Errors
    ///
    /// May fail if the transaction can't be sent or is not mined.
    pub async fn send_value(
        &self,
        to: Address,
        value: U256,
    ) -> eyre::Result<()> {
        let tx = TransactionRequest::default()
            .with_from(self.address())
            .with_to(to)
            .with_value(value);

        self.wallet
            .send_transaction(tx)
            .await?
            .watch()
            .await
            .wrap_err(format!("failed to send {value} wei to {to}"))?;

        Ok(())
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address())
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

/// A unit struct used as a synchronization mechanism in
/// [`AccountFactory::lock`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        /// Accounts get funded from a single master wallet, so creation must
        /// be serialized (otherwise the master nonce will be too low).
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create a new random account and fund it from the master key.
    async fn create() -> eyre::Result<Account> {
        let _lock = AccountFactory::lock().await;

        let rpc_url: Url = env(RPC_URL_ENV_VAR_NAME)?
            .parse()
            .wrap_err("failed to parse RPC_URL string into a URL")?;

        let master = Account::from_signer(master_signer()?, rpc_url.clone());
        let account =
            Account::from_signer(PrivateKeySigner::random(), rpc_url);

        master
            .send_value(account.address(), DEFAULT_FUNDING_ETH)
            .await
            .wrap_err("account's wallet wasn't funded")?;

        tracing::debug!(address = %account.address(), "funded test account");

        Ok(account)
    }
}

/// Get the master signer of the dev node.
fn master_signer() -> eyre::Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(MASTER_PRIVATE_KEY)
        .wrap_err("failed to create master signer")
}
