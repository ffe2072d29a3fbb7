//! ERC-1155 collection whose minting is restricted to the contract owner.
//!
//! Balances, approvals and transfers are handled by [`Erc1155`], the minter
//! is tracked by [`Ownable`]. All token types share a single metadata URI
//! that the owner can replace with [`Nft1155::set_uri`].
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U256};
use openzeppelin_stylus::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc1155::{
        self, extensions::IErc1155MetadataUri, Erc1155, IErc1155,
    },
    utils::introspection::erc165::IErc165,
};
use stylus_sdk::{abi::Bytes, prelude::*, storage::StorageString};

/// An [`Nft1155`] error: either a token error or an ownership error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Error raised by the underlying [`Erc1155`] token.
    Erc1155(erc1155::Error),
    /// Error raised by the [`Ownable`] guard.
    Ownable(ownable::Error),
}

/// State of an [`Nft1155`] contract.
#[entrypoint]
#[storage]
pub struct Nft1155 {
    erc1155: Erc1155,
    ownable: Ownable,
    /// URI shared by every token type.
    uri: StorageString,
}

#[public]
#[implements(IErc1155<Error = erc1155::Error>, IErc1155MetadataUri, IOwnable, IErc165)]
impl Nft1155 {
    /// Sets the shared metadata `uri` and makes `initial_owner` the minter.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::InvalidOwner`] - If `initial_owner` is
    ///   [`Address::ZERO`].
    #[constructor]
    pub fn constructor(
        &mut self,
        uri: String,
        initial_owner: Address,
    ) -> Result<(), Error> {
        self.uri.set_str(uri);
        Ok(self.ownable.constructor(initial_owner)?)
    }

    /// Mints `amount` tokens of type `id` to `to`.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If the caller is not the
    ///   owner.
    /// * [`erc1155::Error::InvalidReceiver`] - If `to` is [`Address::ZERO`]
    ///   or rejects the transfer.
    ///
    /// # Events
    ///
    /// * [`erc1155::TransferSingle`].
    pub fn mint(
        &mut self,
        to: Address,
        id: U256,
        amount: U256,
        data: Bytes,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.erc1155._mint(to, id, amount, &data)?;
        Ok(())
    }

    /// Mints `amounts[i]` tokens of type `ids[i]` to `to`.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If the caller is not the
    ///   owner.
    /// * [`erc1155::Error::InvalidArrayLength`] - If `ids` and `amounts`
    ///   differ in length.
    /// * [`erc1155::Error::InvalidReceiver`] - If `to` is [`Address::ZERO`]
    ///   or rejects the transfer.
    ///
    /// # Events
    ///
    /// * [`erc1155::TransferBatch`].
    #[selector(name = "mintBatch")]
    pub fn mint_batch(
        &mut self,
        to: Address,
        ids: Vec<U256>,
        amounts: Vec<U256>,
        data: Bytes,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.erc1155._mint_batch(to, ids, amounts, &data)?;
        Ok(())
    }

    /// Replaces the URI shared by every token type.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If the caller is not the
    ///   owner.
    #[selector(name = "setURI")]
    pub fn set_uri(&mut self, uri: String) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.uri.set_str(uri);
        Ok(())
    }
}

#[public]
impl IErc1155 for Nft1155 {
    type Error = erc1155::Error;

    fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.erc1155.balance_of(account, id)
    }

    fn balance_of_batch(
        &self,
        accounts: Vec<Address>,
        ids: Vec<U256>,
    ) -> Result<Vec<U256>, Self::Error> {
        self.erc1155.balance_of_batch(accounts, ids)
    }

    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), Self::Error> {
        self.erc1155.set_approval_for_all(operator, approved)
    }

    fn is_approved_for_all(&self, account: Address, operator: Address) -> bool {
        self.erc1155.is_approved_for_all(account, operator)
    }

    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        id: U256,
        value: U256,
        data: Bytes,
    ) -> Result<(), Self::Error> {
        self.erc1155.safe_transfer_from(from, to, id, value, data)
    }

    fn safe_batch_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: Bytes,
    ) -> Result<(), Self::Error> {
        self.erc1155.safe_batch_transfer_from(from, to, ids, values, data)
    }
}

#[public]
impl IErc1155MetadataUri for Nft1155 {
    fn uri(&self, _id: U256) -> String {
        self.uri.get_string()
    }
}

#[public]
impl IOwnable for Nft1155 {
    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Vec<u8>> {
        Ok(self.ownable.transfer_ownership(new_owner)?)
    }

    fn renounce_ownership(&mut self) -> Result<(), Vec<u8>> {
        Ok(self.ownable.renounce_ownership()?)
    }
}

#[public]
impl IErc165 for Nft1155 {
    fn supports_interface(&self, interface_id: B32) -> bool {
        self.erc1155.supports_interface(interface_id)
            || <Self as IErc1155MetadataUri>::interface_id() == interface_id
            || <Self as IOwnable>::interface_id() == interface_id
    }
}
