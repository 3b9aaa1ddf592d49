//! Chronological ordering of quotes.

use std::cmp::Ordering;

use crate::StockQuote;

/// Order two quotes by parsed timestamp, most recent first.
///
/// Returns `Less` when `a` is strictly later than `b`, `Greater` when it is
/// strictly earlier and `Equal` otherwise. A pair where either timestamp is
/// malformed is unordered and compares `Equal`, so this is not a total order
/// once malformed records are present.
pub fn compare_by_timestamp(a: &StockQuote, b: &StockQuote) -> Ordering {
    match (a.timestamp().instant(), b.timestamp().instant()) {
        (Some(a_instant), Some(b_instant)) => b_instant.cmp(&a_instant),
        _ => Ordering::Equal,
    }
}

/// Stable sort into descending chronological order.
///
/// [`compare_by_timestamp`] decides every pair it can order. Pairs it leaves
/// unordered because of a malformed timestamp are broken by placing
/// well-formed records first, which keeps the sort a total order; malformed
/// records keep their original relative order at the tail.
pub fn sort_by_timestamp(quotes: &mut [StockQuote]) {
    quotes.sort_by(|a, b| {
        compare_by_timestamp(a, b).then_with(|| malformed_rank(a).cmp(&malformed_rank(b)))
    });
}

fn malformed_rank(quote: &StockQuote) -> u8 {
    u8::from(!quote.timestamp().is_well_formed())
}
