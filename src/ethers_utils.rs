use ethers::providers::{JsonRpcClient, Middleware, PendingTransaction, Provider};
use ethers::types::{TransactionReceipt, H256};
use eyre::{bail, ContextCompat, WrapErr};
use tracing::{info, instrument};

/// Fetches the receipt of a mined transaction and fails unless it succeeded
#[instrument(skip(provider))]
pub async fn ensure_mined<P: JsonRpcClient>(
    provider: &Provider<P>,
    transaction_hash: H256,
) -> eyre::Result<TransactionReceipt> {
    let receipt = provider
        .get_transaction_receipt(transaction_hash)
        .await
        .wrap_err("Fetching receipt")?
        .with_context(|| {
            format!("Missing receipt for transaction {transaction_hash:?}")
        })?;

    if receipt.status != Some(1.into()) {
        bail!("Transaction {transaction_hash:?} reverted");
    }

    Ok(receipt)
}

/// Blocks until `confirmations` blocks have been built on top of the transaction
#[instrument(skip(provider))]
pub async fn wait_for_confirmations<P: JsonRpcClient>(
    provider: &Provider<P>,
    transaction_hash: H256,
    confirmations: usize,
) -> eyre::Result<TransactionReceipt> {
    let receipt = PendingTransaction::new(transaction_hash, provider)
        .confirmations(confirmations)
        .await
        .wrap_err("Awaiting confirmations")?
        .with_context(|| {
            format!("Transaction {transaction_hash:?} was dropped")
        })?;

    info!(
        block = ?receipt.block_number,
        "Transaction {transaction_hash:?} has {confirmations} confirmations"
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ethers::providers::MockProvider;
    use ethers::types::Transaction;

    use super::*;

    fn mocked() -> (Provider<MockProvider>, MockProvider) {
        let (provider, mock) = Provider::mocked();
        (provider.interval(Duration::from_millis(10)), mock)
    }

    fn receipt(status: u64) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: H256::from_low_u64_be(1),
            status: Some(status.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn accepts_successful_receipt() -> eyre::Result<()> {
        let (provider, mock) = mocked();
        mock.push(receipt(1))?;

        let receipt = ensure_mined(&provider, H256::from_low_u64_be(1)).await?;

        assert_eq!(receipt.status, Some(1.into()));

        Ok(())
    }

    #[tokio::test]
    async fn reverted_receipt_is_an_error() -> eyre::Result<()> {
        let (provider, mock) = mocked();
        mock.push(receipt(0))?;

        let err = ensure_mined(&provider, H256::from_low_u64_be(1))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("reverted"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_receipt_is_an_error() -> eyre::Result<()> {
        let (provider, mock) = mocked();
        mock.push::<Option<TransactionReceipt>, _>(None)?;

        let err = ensure_mined(&provider, H256::from_low_u64_be(1))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Missing receipt"));

        Ok(())
    }

    #[tokio::test]
    async fn dropped_transaction_fails_confirmation_wait() -> eyre::Result<()> {
        let (provider, mock) = mocked();
        mock.push::<Option<Transaction>, _>(None)?;

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            wait_for_confirmations(&provider, H256::from_low_u64_be(1), 6),
        )
        .await?;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("dropped"));

        Ok(())
    }
}
