//! ERC-721 collection where anyone can mint a token for themselves.
//!
//! Every call to [`Nft721::mint`] takes the next id from an internal counter
//! (the first token is `1`), mints it to the caller and stores the supplied
//! metadata URI for it. Ownership, approvals and transfers are handled by
//! [`Erc721`].
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{aliases::B32, uint, Address, U256};
use openzeppelin_stylus::{
    token::erc721::{
        self,
        extensions::{Erc721Metadata, Erc721UriStorage, IErc721Metadata},
        Erc721, IErc721,
    },
    utils::introspection::erc165::IErc165,
};
use stylus_sdk::{abi::Bytes, msg, prelude::*, storage::StorageU256};

const ONE: U256 = uint!(1_U256);

/// State of an [`Nft721`] contract.
#[entrypoint]
#[storage]
pub struct Nft721 {
    erc721: Erc721,
    metadata: Erc721Metadata,
    uri_storage: Erc721UriStorage,
    /// Id of the most recently minted token.
    last_token_id: StorageU256,
}

#[public]
#[implements(IErc721<Error = erc721::Error>, IErc721Metadata<Error = erc721::Error>, IErc165)]
impl Nft721 {
    /// Sets the collection `name` and `symbol`.
    #[constructor]
    pub fn constructor(&mut self, name: String, symbol: String) {
        self.metadata.constructor(name, symbol);
    }

    /// Mints the next token id to the caller and binds `uri` to it.
    ///
    /// Returns the id of the minted token.
    ///
    /// # Errors
    ///
    /// * [`erc721::Error::InvalidReceiver`] - If the caller is
    ///   [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc721::Transfer`].
    /// * [`openzeppelin_stylus::token::erc721::extensions::uri_storage::MetadataUpdate`].
    pub fn mint(&mut self, uri: String) -> Result<U256, erc721::Error> {
        let token_id = self.last_token_id.get() + ONE;
        self.last_token_id.set(token_id);

        self.erc721._mint(msg::sender(), token_id)?;
        self.uri_storage._set_token_uri(token_id, uri);

        Ok(token_id)
    }
}

#[public]
impl IErc721 for Nft721 {
    type Error = erc721::Error;

    fn balance_of(&self, owner: Address) -> Result<U256, Self::Error> {
        self.erc721.balance_of(owner)
    }

    fn owner_of(&self, token_id: U256) -> Result<Address, Self::Error> {
        self.erc721.owner_of(token_id)
    }

    fn safe_transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Self::Error> {
        self.erc721.safe_transfer_from(from, to, token_id)
    }

    #[selector(name = "safeTransferFrom")]
    fn safe_transfer_from_with_data(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
        data: Bytes,
    ) -> Result<(), Self::Error> {
        self.erc721.safe_transfer_from_with_data(from, to, token_id, data)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Self::Error> {
        self.erc721.transfer_from(from, to, token_id)
    }

    fn approve(
        &mut self,
        to: Address,
        token_id: U256,
    ) -> Result<(), Self::Error> {
        self.erc721.approve(to, token_id)
    }

    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), Self::Error> {
        self.erc721.set_approval_for_all(operator, approved)
    }

    fn get_approved(&self, token_id: U256) -> Result<Address, Self::Error> {
        self.erc721.get_approved(token_id)
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.erc721.is_approved_for_all(owner, operator)
    }
}

#[public]
impl IErc721Metadata for Nft721 {
    type Error = erc721::Error;

    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    #[selector(name = "tokenURI")]
    fn token_uri(&self, token_id: U256) -> Result<String, Self::Error> {
        self.uri_storage.token_uri(token_id, &self.erc721, &self.metadata)
    }
}

#[public]
impl IErc165 for Nft721 {
    fn supports_interface(&self, interface_id: B32) -> bool {
        self.erc721.supports_interface(interface_id)
            || <Self as IErc721Metadata>::interface_id() == interface_id
    }
}
