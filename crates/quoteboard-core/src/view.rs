//! # View Selection
//!
//! Maps a lifecycle snapshot to exactly one of three view descriptions. The
//! descriptions are plain data for a renderer; nothing here draws anything.
//!
//! | State | View |
//! |-------|------|
//! | `Loading` | [`View::Loading`] |
//! | `Error { message }` | [`View::Error`] with the message |
//! | `Loaded { dataset }` | [`View::Table`] with tier, count and sorted rows |

use serde::Serialize;

use crate::ordering::sort_by_timestamp;
use crate::{classify, Dataset, LifecycleState, SizeTier, StockQuote};

/// Renderable description of the current retrieval state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Loading(LoadingView),
    Error(ErrorView),
    Table(TableView),
}

impl View {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Loading(_) => "loading",
            Self::Error(_) => "error",
            Self::Table(_) => "table",
        }
    }
}

/// Retrieval still in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadingView {}

/// Retrieval failed; the message is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub message: String,
}

/// Retrieval succeeded; rows are most recent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub tier: SizeTier,
    pub count: usize,
    pub rows: Vec<StockQuote>,
}

impl TableView {
    /// Build a table from a dataset without modifying it.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut rows = dataset.as_slice().to_vec();
        sort_by_timestamp(&mut rows);

        Self {
            tier: classify(dataset.len()),
            count: dataset.len(),
            rows,
        }
    }
}

/// Select the view for a lifecycle snapshot.
pub fn select(state: &LifecycleState) -> View {
    match state {
        LifecycleState::Loading => View::Loading(LoadingView::default()),
        LifecycleState::Error { message } => View::Error(ErrorView {
            message: message.clone(),
        }),
        LifecycleState::Loaded { dataset } => View::Table(TableView::from_dataset(dataset)),
    }
}
