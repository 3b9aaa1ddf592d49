use std::sync::Arc;

use crate::Dataset;

/// Progress of the single retrieval attempt owned by a
/// [`FetchController`](crate::FetchController).
///
/// Starts as `Loading` and moves to exactly one terminal member.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LifecycleState {
    #[default]
    Loading,
    Error { message: String },
    Loaded { dataset: Arc<Dataset> },
}

impl LifecycleState {
    pub fn loaded(dataset: Dataset) -> Self {
        Self::Loaded {
            dataset: Arc::new(dataset),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::Loaded { .. } => "loaded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_is_non_terminal() {
        assert!(!LifecycleState::default().is_terminal());
        assert!(LifecycleState::error("boom").is_terminal());
        assert!(LifecycleState::loaded(Dataset::default()).is_terminal());
    }
}
