//! # Domain Models
//!
//! Canonical record types produced by a successful retrieval.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockQuote`] | One stock identity plus a buy/sell quote |
//! | [`QuoteId`] | Record identifier, unique within a dataset |
//! | [`QuoteTimestamp`] | Raw `YYYY-MM-DD HH:MM:SS` text with its parsed instant |
//! | [`Dataset`] | Complete, immutable sequence of quotes |
//!
//! Records are immutable once built: fields are private and exposed through
//! accessors only. A [`Dataset`] is either complete or absent; there is no
//! way to append to one after construction.

mod quote;
mod timestamp;

pub use quote::{Dataset, QuoteId, StockQuote};
pub use timestamp::QuoteTimestamp;
