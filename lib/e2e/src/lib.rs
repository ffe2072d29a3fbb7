//! Deployment and end-to-end testing helpers for Stylus NFT contracts.
//!
//! Tests get freshly funded [`Account`]s through [`test`], publish a new
//! contract instance with [`Account::as_deployer`] and assert on the
//! results with [`Revert`], [`EventExt`] and [`ReceiptExt`].
mod account;
/// Constructor arguments for `cargo stylus deploy`.
pub mod constructor;
mod deploy;
mod error;
mod event;
mod receipt;
mod system;

pub use account::Account;
pub use constructor::{Constructor, ConstructorArg};
pub use deploy::{
    parse_deploy_output, Deployer, Deployment, StylusDeployerError,
};
pub use e2e_proc::test;
pub use error::Revert;
pub use event::EventExt;
pub use receipt::ReceiptExt;
pub use system::{
    env, provider, Wallet, DEPLOYER_ADDRESS_ENV_VAR_NAME, RPC_URL_ENV_VAR_NAME,
};

/// Sends a transaction built by an `alloy` call builder.
///
/// Evaluates to the pending transaction result.
#[macro_export]
macro_rules! send {
    ($e:expr) => {
        $e.send().await
    };
}

/// Sends a transaction and waits until it is included in a block.
///
/// Evaluates to the transaction hash result.
#[macro_export]
macro_rules! watch {
    ($e:expr) => {
        $crate::send!($e)?.watch().await
    };
}

/// Sends a transaction and waits for its receipt.
///
/// Evaluates to the receipt result.
#[macro_export]
macro_rules! receipt {
    ($e:expr) => {
        $crate::send!($e)?.get_receipt().await
    };
}
