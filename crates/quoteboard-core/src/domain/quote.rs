use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::QuoteTimestamp;

/// Record identifier as delivered by the feed (numeric ids are kept as text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for QuoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One market record: stock identity plus its buy/sell quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuote {
    id: QuoteId,
    name: String,
    symbol: String,
    industry: String,
    sector: String,
    buy_price: f64,
    sell_price: f64,
    timestamp: QuoteTimestamp,
}

impl StockQuote {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuoteId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        industry: impl Into<String>,
        sector: impl Into<String>,
        buy_price: f64,
        sell_price: f64,
        timestamp: QuoteTimestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            industry: industry.into(),
            sector: sector.into(),
            buy_price,
            sell_price,
            timestamp,
        }
    }

    pub fn id(&self) -> &QuoteId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub const fn buy_price(&self) -> f64 {
        self.buy_price
    }

    pub const fn sell_price(&self) -> f64 {
        self.sell_price
    }

    pub fn timestamp(&self) -> &QuoteTimestamp {
        &self.timestamp
    }
}

/// Complete result of one successful retrieval, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    quotes: Vec<StockQuote>,
}

impl Dataset {
    pub fn new(quotes: Vec<StockQuote>) -> Self {
        Self { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn as_slice(&self) -> &[StockQuote] {
        &self.quotes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StockQuote> {
        self.quotes.iter()
    }
}

impl From<Vec<StockQuote>> for Dataset {
    fn from(quotes: Vec<StockQuote>) -> Self {
        Self::new(quotes)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a StockQuote;
    type IntoIter = std::slice::Iter<'a, StockQuote>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
