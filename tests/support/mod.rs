//! Shared fixtures for behavior tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use quoteboard_core::{Endpoint, HttpClient, HttpError, HttpRequest, HttpResponse};
use serde_json::{json, Value};

/// Transport stub that answers with a canned result and records requests.
#[derive(Debug)]
pub struct StubHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubHttpClient {
    pub fn ok(body: impl Into<String>) -> Arc<Self> {
        Self::with(Ok(HttpResponse::ok_json(body)))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::with(Err(HttpError::new(message)))
    }

    pub fn with(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .len()
    }
}

impl HttpClient for StubHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn endpoint() -> Endpoint {
    Endpoint::parse("https://feed.example.test/stocks.json").expect("valid endpoint")
}

pub fn record(id: usize, timestamp: &str) -> Value {
    json!({
        "stockID": id,
        "stock": {
            "name": format!("Company {id}"),
            "symbol": format!("CO{id}"),
            "industry": "Software",
            "sector": "Technology"
        },
        "rates": { "buy": 100.0 + id as f64, "sell": 99.5 + id as f64, "timestamp": timestamp }
    })
}

pub fn feed_body(records: Vec<Value>) -> String {
    json!({ "stockData": records }).to_string()
}

/// `count` records with distinct, shuffled timestamps.
pub fn feed_of_size(count: usize) -> String {
    let records = (0..count)
        .map(|i| {
            let minutes = (i * 37) % count.max(1);
            let timestamp = format!(
                "2024-06-{:02} {:02}:{:02}:00",
                1 + minutes / 1440,
                (minutes / 60) % 24,
                minutes % 60
            );
            record(i, &timestamp)
        })
        .collect();
    feed_body(records)
}
