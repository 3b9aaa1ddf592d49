//! Wire format of the upstream quote feed.
//!
//! ```text
//! { "stockData": [
//!     { "stockID": 1,
//!       "stock": { "name": "...", "symbol": "...", "industry": "...", "sector": "..." },
//!       "rates": { "buy": 1.0, "sell": 1.0, "timestamp": "2024-12-26 08:43:15" } }
//! ] }
//! ```
//!
//! Decoding is two-staged so the failure category survives: text that is not
//! JSON is a decode failure, JSON without a well-shaped `stockData` array is a
//! schema failure.

use serde::Deserialize;
use serde_json::Value;

use crate::{Dataset, FetchError, QuoteId, QuoteTimestamp, StockQuote};

/// Key holding the record collection in the response body.
pub const RECORDS_KEY: &str = "stockData";

#[derive(Debug, Clone, Deserialize)]
struct StockRecordPayload {
    #[serde(rename = "stockID")]
    stock_id: RawStockId,
    stock: StockPayload,
    rates: RatesPayload,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawStockId {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
struct StockPayload {
    name: String,
    symbol: String,
    industry: String,
    sector: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RatesPayload {
    buy: f64,
    sell: f64,
    timestamp: String,
}

/// Decode a response body into a complete [`Dataset`].
///
/// An empty `stockData` array is a valid, empty dataset.
pub fn decode_dataset(body: &str) -> Result<Dataset, FetchError> {
    let document: Value = serde_json::from_str(body)
        .map_err(|error| FetchError::Decode(format!("response body is not valid JSON: {error}")))?;

    let records = match document {
        Value::Object(mut map) => map.remove(RECORDS_KEY),
        _ => None,
    }
    .ok_or_else(|| {
        FetchError::Schema(format!("response is missing the '{RECORDS_KEY}' key"))
    })?;

    let payloads: Vec<StockRecordPayload> = serde_json::from_value(records).map_err(|error| {
        FetchError::Schema(format!("'{RECORDS_KEY}' does not match the record shape: {error}"))
    })?;

    Ok(payloads.into_iter().map(normalize_record).collect::<Vec<_>>().into())
}

fn normalize_record(payload: StockRecordPayload) -> StockQuote {
    let id = match payload.stock_id {
        RawStockId::Number(number) => QuoteId::new(number.to_string()),
        RawStockId::Text(text) => QuoteId::new(text),
    };

    StockQuote::new(
        id,
        payload.stock.name,
        payload.stock.symbol,
        payload.stock.industry,
        payload.stock.sector,
        payload.rates.buy,
        payload.rates.sell,
        QuoteTimestamp::new(payload.rates.timestamp),
    )
}
