//! Behavior-driven tests for the retrieval lifecycle
//!
//! These tests verify HOW a fetch controller moves from loading to a terminal
//! state for the different upstream outcomes.

mod support;

use std::sync::Arc;

use quoteboard_core::{
    select, FetchController, FetchError, HttpResponse, LifecycleState, View,
};
use support::{endpoint, feed_body, record, StubHttpClient};

// =============================================================================
// Lifecycle: Success
// =============================================================================

#[tokio::test]
async fn when_feed_returns_records_state_becomes_loaded_with_all_of_them() {
    // Given: A feed with three records
    let client = StubHttpClient::ok(feed_body(vec![
        record(1, "2024-01-01 00:00:00"),
        record(2, "2024-03-01 00:00:00"),
        record(3, "2024-02-01 00:00:00"),
    ]));
    let controller = FetchController::new(client.clone());

    // When: The retrieval is started
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: The complete dataset is loaded in feed order
    let LifecycleState::Loaded { dataset } = state else {
        panic!("expected loaded state");
    };
    let ids: Vec<_> = dataset.iter().map(|q| q.id().as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(client.request_count(), 1, "exactly one request per start");
}

#[tokio::test]
async fn when_feed_returns_empty_array_state_is_loaded_not_error() {
    // Given: A feed whose stockData array is empty
    let client = StubHttpClient::ok(r#"{"stockData": []}"#);
    let controller = FetchController::new(client);

    // When: The retrieval completes
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: An empty dataset is loaded
    match state {
        LifecycleState::Loaded { dataset } => assert!(dataset.is_empty()),
        other => panic!("expected loaded state, got {other:?}"),
    }
}

// =============================================================================
// Lifecycle: Failures
// =============================================================================

#[tokio::test]
async fn when_network_fails_state_becomes_error_with_message() {
    // Given: A transport that cannot reach the feed
    let client = StubHttpClient::failing("connection failed: dns error");
    let controller = FetchController::new(client);

    // When: The retrieval is started
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: The state is an error carrying a non-empty message
    let LifecycleState::Error { message } = &state else {
        panic!("expected error state, got {state:?}");
    };
    assert!(!message.is_empty());
    assert!(message.contains("dns error"));

    // And: The error view is selected
    assert!(matches!(select(&state), View::Error(_)));
}

#[tokio::test]
async fn when_stock_data_key_is_missing_state_is_error_not_empty_table() {
    // Given: A well-formed JSON body without the records key
    let client = StubHttpClient::ok(r#"{"data": [], "count": 0}"#);
    let controller = FetchController::new(client);

    // When: The retrieval completes
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: The lifecycle records a schema failure
    match &state {
        LifecycleState::Error { message } => assert!(message.contains("stockData")),
        other => panic!("expected error state, got {other:?}"),
    }
    assert!(!matches!(select(&state), View::Table(_)));
}

#[tokio::test]
async fn when_body_is_not_json_state_becomes_decode_error() {
    // Given: An upstream that answers with HTML
    let client = StubHttpClient::ok("<html><body>maintenance</body></html>");
    let controller = FetchController::new(client);

    // When: The retrieval completes
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: The message names the decode failure
    match state {
        LifecycleState::Error { message } => assert!(message.starts_with("decode failure")),
        other => panic!("expected error state, got {other:?}"),
    }
}

#[tokio::test]
async fn when_upstream_returns_server_error_state_becomes_network_error() {
    // Given: An upstream answering 500
    let client = StubHttpClient::with(Ok(HttpResponse::with_status(500, "oops")));
    let controller = FetchController::new(client);

    // When: The retrieval completes
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: The status is surfaced as a network failure
    match state {
        LifecycleState::Error { message } => {
            assert_eq!(message, "network failure: upstream returned status 500");
        }
        other => panic!("expected error state, got {other:?}"),
    }
}

// =============================================================================
// Lifecycle: Single Attempt
// =============================================================================

#[tokio::test]
async fn when_started_twice_second_start_is_rejected_without_request() {
    // Given: A controller that already completed its attempt
    let client = StubHttpClient::failing("connection refused");
    let controller = FetchController::new(client.clone());
    let first = controller.start(&endpoint()).await.expect("first start");

    // When: Start is invoked again
    let second = controller.start(&endpoint()).await;

    // Then: No retry happens and the state is unchanged
    assert_eq!(second, Err(FetchError::AlreadyStarted));
    assert_eq!(controller.state(), first);
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn watchers_observe_the_same_terminal_snapshot() {
    // Given: A controller with a watcher subscribed before start
    let client = StubHttpClient::ok(feed_body(vec![record(1, "2024-01-01 00:00:00")]));
    let controller = Arc::new(FetchController::new(client));
    let mut watcher = controller.subscribe();
    assert_eq!(watcher.snapshot(), LifecycleState::Loading);

    // When: The retrieval completes
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: The watcher sees the same terminal state
    assert_eq!(watcher.settled().await, Some(state));
}

#[tokio::test]
async fn disposed_controller_never_contacts_the_feed() {
    // Given: A controller that is torn down before it is started
    let client = StubHttpClient::ok(feed_body(vec![record(1, "2024-01-01 00:00:00")]));
    let controller = FetchController::new(client.clone());
    controller.dispose();

    // When: The owner still calls start
    let state = controller.start(&endpoint()).await.expect("first start");

    // Then: No request is issued and the state stays loading
    assert_eq!(state, LifecycleState::Loading);
    assert_eq!(client.request_count(), 0);
}
