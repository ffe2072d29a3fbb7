use alloy::{
    network::ReceiptResponse, primitives::Address,
    rpc::types::TransactionReceipt,
};
use eyre::ContextCompat;

use crate::deploy::Deployment;

/// Extension trait to recover address of the contract that was deployed.
pub trait ReceiptExt {
    /// Returns the address of the deployed contract.
    ///
    /// # Errors
    ///
    /// May fail if there's no contract address.
    fn address(&self) -> eyre::Result<Address>;
}

impl ReceiptExt for TransactionReceipt {
    fn address(&self) -> eyre::Result<Address> {
        self.contract_address().context("should contain contract address")
    }
}

impl ReceiptExt for Deployment {
    fn address(&self) -> eyre::Result<Address> {
        Ok(self.contract_address)
    }
}
