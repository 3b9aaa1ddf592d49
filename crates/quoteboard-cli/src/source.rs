//! Transport selection for a run.

use std::path::Path;
use std::sync::Arc;

use quoteboard_core::{FixtureHttpClient, HttpClient, ReqwestHttpClient};
use tracing::debug;

use crate::error::CliError;

/// Network transport, or a fixed body read from `fixture` when given.
pub fn build_client(fixture: Option<&Path>) -> Result<Arc<dyn HttpClient>, CliError> {
    match fixture {
        Some(path) => {
            let body = std::fs::read_to_string(path).map_err(|source| CliError::Fixture {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), bytes = body.len(), "serving feed from fixture");
            Ok(Arc::new(FixtureHttpClient::new(body)))
        }
        None => Ok(Arc::new(ReqwestHttpClient::new())),
    }
}
