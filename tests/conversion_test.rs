use anyhow::Result;
use saldo::application::AppError;
use saldo::rates::{RateClient, convert_at_rate};

mod common;

use common::test_service;

// Conversion validation fails before any request is issued, so these run
// without a reachable rate service.

#[tokio::test]
async fn test_convert_rejects_non_numeric_amount() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let err = service
        .convert_currency("abc", "USD", "THB")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "amount", .. }));

    Ok(())
}

#[tokio::test]
async fn test_convert_rejects_non_positive_amount() -> Result<()> {
    let (service, _temp) = test_service().await?;

    for bad in ["-5", "0"] {
        let err = service
            .convert_currency(bad, "USD", "THB")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "amount", .. }));
    }

    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_is_classified() -> Result<()> {
    let (service, _temp) = test_service().await?;
    // Nothing listens on the discard port, so the request fails fast.
    let service = service.with_rate_client(RateClient::with_endpoint("http://127.0.0.1:9"));

    let err = service
        .convert_currency("100", "USD", "THB")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ServiceUnavailable(_)));

    // A failed conversion never mutates the ledger.
    assert!(service.list_transactions().await?.is_empty());

    Ok(())
}

#[test]
fn test_convert_at_supplied_rate() {
    // 100 USD at 35.50 THB/USD
    assert_eq!(convert_at_rate(100.0, 35.50), 3550.00);
}
