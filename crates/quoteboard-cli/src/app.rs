//! One retrieval run: start the controller, select the view, render it.

use std::io::Write;
use std::sync::Arc;

use quoteboard_core::{select, Endpoint, FetchController, HttpClient, View};
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Exit code for a run that ended on the error view.
pub const ERROR_VIEW_EXIT_CODE: u8 = 3;

/// Run one retrieval against `endpoint` and write the final view to `out`.
///
/// Returns the process exit code: `0` for a loaded table, `3` for the error
/// view.
pub async fn run_with<W: Write>(
    client: Arc<dyn HttpClient>,
    endpoint: &Endpoint,
    format: OutputFormat,
    pretty: bool,
    out: &mut W,
) -> Result<u8, CliError> {
    let controller = FetchController::new(client);

    info!(endpoint = %endpoint, "starting retrieval");
    let state = controller.start(endpoint).await?;
    let view = select(&state);
    crate::output::render_to(out, &view, format, pretty)?;
    out.flush()?;

    if matches!(view, View::Error(_)) {
        return Ok(ERROR_VIEW_EXIT_CODE);
    }
    Ok(0)
}
