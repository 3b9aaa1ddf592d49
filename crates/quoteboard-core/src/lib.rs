//! # Quoteboard Core
//!
//! Retrieval lifecycle, chronological ordering and view selection for a
//! remote stock-quote feed.
//!
//! ## Overview
//!
//! - **Domain models** for quotes and the dataset a retrieval produces
//! - **Fetch controller** that runs one retrieval and owns its lifecycle state
//! - **Comparator** ordering quotes by timestamp, most recent first
//! - **Classifier** tagging a dataset by size
//! - **View selector** turning a lifecycle snapshot into a view description
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`classify`] | Size tiers and their thresholds |
//! | [`config`] | Endpoint resolution |
//! | [`domain`] | Domain models (StockQuote, Dataset, QuoteTimestamp) |
//! | [`error`] | Core error types |
//! | [`fetch`] | Fetch controller and state watcher |
//! | [`http_client`] | HTTP client abstraction |
//! | [`lifecycle`] | Lifecycle state |
//! | [`ordering`] | Timestamp comparator and stable sort |
//! | [`payload`] | Feed wire format |
//! | [`view`] | View selection |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Fetch Controller│────▶│ HTTP Client      │
//! │ (single writer) │     │ (reqwest/fixture)│
//! └────────┬────────┘     └──────────────────┘
//!          │ LifecycleState snapshots
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  View Selector  │────▶│ Comparator       │
//! │                 │────▶│ Classifier       │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//!   Loading | Error | Table
//! ```
//!
//! ## Error Handling
//!
//! Retrieval failures never escape [`FetchController::start`] as errors; they
//! settle the lifecycle in `Error { message }`:
//!
//! ```rust
//! use quoteboard_core::{select, LifecycleState, View};
//!
//! let state = LifecycleState::error("network failure: connection refused");
//! match select(&state) {
//!     View::Error(view) => assert!(view.message.contains("connection refused")),
//!     _ => unreachable!(),
//! }
//! ```

pub mod classify;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod http_client;
pub mod lifecycle;
pub mod ordering;
pub mod payload;
pub mod view;

// Re-export commonly used types at crate root for convenience

// Classification
pub use classify::{classify, SizeTier, LARGE_THRESHOLD, VERY_LARGE_THRESHOLD};

// Configuration
pub use config::{Endpoint, FetchConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};

// Domain models
pub use domain::{Dataset, QuoteId, QuoteTimestamp, StockQuote};

// Error types
pub use error::{FetchError, ValidationError};

// Retrieval
pub use fetch::{FetchController, StateWatcher};
pub use lifecycle::LifecycleState;

// HTTP client types
pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};

// Ordering
pub use ordering::{compare_by_timestamp, sort_by_timestamp};

// Payload decoding
pub use payload::{decode_dataset, RECORDS_KEY};

// Views
pub use view::{select, ErrorView, LoadingView, TableView, View};
