//! Contract tests for the upstream feed document.

use quoteboard_core::{decode_dataset, FetchError, RECORDS_KEY};

const SAMPLE_FEED: &str = r#"{
  "stockData": [
    {
      "stockID": 1,
      "stock": { "name": "Apple Inc.", "symbol": "AAPL", "industry": "Consumer Electronics", "sector": "Technology" },
      "rates": { "buy": 254.49, "sell": 252.2, "timestamp": "2024-12-26 08:43:15" }
    },
    {
      "stockID": 2,
      "stock": { "name": "Microsoft Corporation", "symbol": "MSFT", "industry": "Software", "sector": "Technology" },
      "rates": { "buy": 438.11, "sell": 436.6, "timestamp": "2024-12-26 09:01:47" }
    }
  ]
}"#;

#[test]
fn sample_feed_decodes_every_documented_field() {
    let dataset = decode_dataset(SAMPLE_FEED).expect("sample feed must decode");
    assert_eq!(dataset.len(), 2);

    let msft = &dataset.as_slice()[1];
    assert_eq!(msft.id().as_str(), "2");
    assert_eq!(msft.name(), "Microsoft Corporation");
    assert_eq!(msft.symbol(), "MSFT");
    assert_eq!(msft.industry(), "Software");
    assert_eq!(msft.sector(), "Technology");
    assert_eq!(msft.buy_price(), 438.11);
    assert_eq!(msft.sell_price(), 436.6);
    assert_eq!(msft.timestamp().as_str(), "2024-12-26 09:01:47");
}

#[test]
fn extra_fields_are_ignored() {
    let body = SAMPLE_FEED.replacen("\"stockData\"", "\"generated\": \"today\", \"stockData\"", 1);
    assert_eq!(decode_dataset(&body).expect("valid").len(), 2);
}

#[test]
fn records_key_is_case_sensitive() {
    assert_eq!(RECORDS_KEY, "stockData");
    let error = decode_dataset(r#"{"stockdata": []}"#).expect_err("must fail");
    assert!(matches!(error, FetchError::Schema(_)));
}

#[test]
fn null_records_are_a_schema_failure() {
    let error = decode_dataset(r#"{"stockData": null}"#).expect_err("must fail");
    assert!(matches!(error, FetchError::Schema(_)));
}

#[test]
fn non_numeric_price_is_a_schema_failure() {
    let body = SAMPLE_FEED.replace("254.49", "\"n/a\"");
    let error = decode_dataset(&body).expect_err("must fail");
    assert!(matches!(error, FetchError::Schema(_)));
}
