//! Minting a token from a deployed `Nft721` collection.
use alloy::{
    network::ReceiptResponse,
    primitives::{Address, TxHash, U256},
    rpc::types::{Log, TransactionReceipt},
    sol,
};
use e2e::Account;
use eyre::{ContextCompat, WrapErr};

sol!(
    #[sol(rpc)]
    contract Nft721 {
        function mint(string memory uri) external returns (uint256 tokenId);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
    }
);

/// Mint a token bound to `uri` from the collection at `contract` to
/// `account` and return the mined receipt.
///
/// # Errors
///
/// May fail if the transaction can't be sent, is not mined, or reverted.
pub async fn mint(
    account: &Account,
    contract: Address,
    uri: String,
) -> eyre::Result<TransactionReceipt> {
    let nft = Nft721::new(contract, &account.wallet);
    tracing::info!(%contract, minter = %account.address(), %uri, "minting");

    let receipt = nft
        .mint(uri)
        .send()
        .await?
        .get_receipt()
        .await
        .wrap_err("failed to fetch mint receipt")?;
    ensure_succeeded(receipt.status(), receipt.transaction_hash)?;

    tracing::info!(tx_hash = %receipt.transaction_hash, "minted");
    Ok(receipt)
}

/// Fails when the transaction `tx_hash` did not succeed on chain.
fn ensure_succeeded(status: bool, tx_hash: TxHash) -> eyre::Result<()> {
    if !status {
        eyre::bail!("mint transaction {tx_hash} reverted");
    }
    Ok(())
}

/// Id of the token minted to `to` in `receipt`.
///
/// # Errors
///
/// May fail if the receipt holds no mint event for `to`.
pub fn token_id(
    receipt: &TransactionReceipt,
    to: Address,
) -> eyre::Result<U256> {
    minted_token_id(receipt.inner.logs(), to)
        .context("mint receipt holds no transfer to the minter")
}

/// Id of the first token minted to `to` among `logs`.
#[must_use]
pub fn minted_token_id(logs: &[Log], to: Address) -> Option<U256> {
    logs.iter()
        .filter_map(|log| log.log_decode::<Nft721::Transfer>().ok())
        .map(|log| log.inner.data)
        .find(|transfer| transfer.from == Address::ZERO && transfer.to == to)
        .map(|transfer| transfer.tokenId)
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, uint},
        sol_types::SolEvent,
    };

    use super::*;

    const CONTRACT: Address =
        address!("16B8aEC0B12a95d6fcFdB5d68dca41929c7DA7a6");
    const ALICE: Address = address!("3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");
    const BOB: Address = address!("a6e41ffd769491a42a6e5ce453259b93983a22ef");

    fn transfer_log(from: Address, to: Address, token_id: U256) -> Log {
        let event = Nft721::Transfer { from, to, tokenId: token_id };
        Log {
            inner: alloy::primitives::Log {
                address: CONTRACT,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn finds_id_minted_to_account() {
        let logs = vec![
            transfer_log(Address::ZERO, BOB, uint!(1_U256)),
            transfer_log(Address::ZERO, ALICE, uint!(2_U256)),
        ];

        assert_eq!(minted_token_id(&logs, ALICE), Some(uint!(2_U256)));
    }

    #[test]
    fn ignores_plain_transfers() {
        let logs = vec![transfer_log(BOB, ALICE, uint!(1_U256))];

        assert_eq!(minted_token_id(&logs, ALICE), None);
    }

    #[test]
    fn error_when_transaction_reverted() {
        let tx_hash = TxHash::repeat_byte(0xab);

        let err = ensure_succeeded(false, tx_hash)
            .expect_err("should reject a reverted mint");

        assert!(err.to_string().contains(&tx_hash.to_string()));
        assert!(ensure_succeeded(true, tx_hash).is_ok());
    }

    #[test]
    fn ignores_unrelated_logs() {
        let unrelated = Log {
            inner: alloy::primitives::Log {
                address: CONTRACT,
                data: alloy::primitives::LogData::new_unchecked(
                    vec![],
                    vec![0x01].into(),
                ),
            },
            ..Default::default()
        };

        assert_eq!(minted_token_id(&[unrelated], ALICE), None);
    }
}
