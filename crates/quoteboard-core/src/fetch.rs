//! Single-attempt retrieval and lifecycle ownership.
//!
//! A [`FetchController`] is the only writer of its [`LifecycleState`].
//! Readers get snapshots, either directly through
//! [`FetchController::state`] or through a [`StateWatcher`] that can wait for
//! the terminal transition.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quoteboard_core::{FetchConfig, FetchController, ReqwestHttpClient, select};
//!
//! let config = FetchConfig::resolve(None)?;
//! let controller = FetchController::new(Arc::new(ReqwestHttpClient::new()));
//! let state = controller.start(&config.endpoint).await?;
//! let view = select(&state);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::http_client::{HttpClient, HttpRequest};
use crate::payload::decode_dataset;
use crate::{Dataset, Endpoint, FetchError, LifecycleState};

/// Runs exactly one retrieval attempt and owns its lifecycle state.
pub struct FetchController {
    http_client: Arc<dyn HttpClient>,
    state: watch::Sender<LifecycleState>,
    started: AtomicBool,
    disposed: AtomicBool,
}

impl FetchController {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        let (state, _) = watch::channel(LifecycleState::Loading);
        Self {
            http_client,
            state,
            started: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        }
    }

    /// Issue the single request to `endpoint` and settle the lifecycle.
    ///
    /// Transport, decode and schema failures are not returned as errors: they
    /// become `LifecycleState::Error` and the returned snapshot carries them.
    /// The only error is [`FetchError::AlreadyStarted`], returned without any
    /// request when this controller has been started before. A disposed
    /// controller issues no request and returns its current snapshot.
    pub async fn start(&self, endpoint: &Endpoint) -> Result<LifecycleState, FetchError> {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!(endpoint = %endpoint, "retrieval already started; ignoring second start");
            return Err(FetchError::AlreadyStarted);
        }

        if self.is_disposed() {
            debug!(endpoint = %endpoint, "controller disposed; skipping retrieval");
            return Ok(self.state());
        }

        debug!(endpoint = %endpoint, "issuing retrieval");
        let next = match self.retrieve(endpoint).await {
            Ok(dataset) => {
                debug!(records = dataset.len(), "retrieval succeeded");
                LifecycleState::loaded(dataset)
            }
            Err(error) => {
                warn!(code = error.code(), error = %error, "retrieval failed");
                LifecycleState::error(error.to_string())
            }
        };

        self.transition(next);
        Ok(self.state())
    }

    /// Current snapshot of the lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state.borrow().clone()
    }

    /// Read-only handle that observes this controller's state.
    pub fn subscribe(&self) -> StateWatcher {
        StateWatcher {
            receiver: self.state.subscribe(),
        }
    }

    /// Mark the controller as torn down.
    ///
    /// An attempt still in flight runs to completion but its result is
    /// discarded; the state stays as it was at disposal.
    pub fn dispose(&self) {
        // Flag under the state lock so it cannot interleave with a transition.
        self.state.send_if_modified(|current| {
            if !self.disposed.swap(true, Ordering::SeqCst) {
                debug!(state = current.as_str(), "controller disposed");
            }
            false
        });
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    async fn retrieve(&self, endpoint: &Endpoint) -> Result<Dataset, FetchError> {
        let request =
            HttpRequest::get(endpoint.as_str()).with_header("accept", "application/json");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| FetchError::Network(error.message().to_owned()))?;

        if !response.is_success() {
            return Err(FetchError::Network(format!(
                "upstream returned status {}",
                response.status
            )));
        }

        decode_dataset(&response.body)
    }

    /// Apply the one permitted `Loading -> terminal` transition.
    ///
    /// The disposal check runs under the same lock as the write.
    fn transition(&self, next: LifecycleState) -> bool {
        let next_kind = next.as_str();
        let mut discarded = false;
        let written = self.state.send_if_modified(|current| {
            if self.is_disposed() {
                discarded = true;
                return false;
            }
            if current.is_terminal() {
                return false;
            }
            *current = next;
            true
        });

        if discarded {
            warn!(
                next = next_kind,
                "discarding retrieval result for disposed controller"
            );
        }
        written
    }
}

impl std::fmt::Debug for FetchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchController")
            .field("state", &self.state.borrow().as_str())
            .field("started", &self.started.load(Ordering::SeqCst))
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Snapshot reader for a [`FetchController`]'s state.
#[derive(Debug, Clone)]
pub struct StateWatcher {
    receiver: watch::Receiver<LifecycleState>,
}

impl StateWatcher {
    pub fn snapshot(&self) -> LifecycleState {
        self.receiver.borrow().clone()
    }

    /// Wait until the state is terminal.
    ///
    /// Returns `None` when the controller is dropped while still loading.
    pub async fn settled(&mut self) -> Option<LifecycleState> {
        self.receiver
            .wait_for(LifecycleState::is_terminal)
            .await
            .ok()
            .map(|state| state.clone())
    }
}
