// Common test utilities shared across test files

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use baasic_profile_client::transport::{Response, Transport, TransportError};
use baasic_profile_client::{ClientSettings, ProfileClient};

/// One request as observed by the transport double.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub uri: String,
    pub body: Option<Value>,
}

/// Transport double that records every request and replays canned
/// response bodies in order. Replies `{}` once the canned list runs dry.
pub struct RecordingTransport {
    requests: Mutex<Vec<Recorded>>,
    responses: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(Vec::new()),
        })
    }

    pub fn enqueue_response(&self, body: &str) {
        self.responses.lock().unwrap().push(body.to_string());
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        uri: &str,
        body: Option<Value>,
    ) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(Recorded {
            method,
            uri: uri.to_string(),
            body,
        });
        let mut responses = self.responses.lock().unwrap();
        let body = if responses.is_empty() {
            "{}".to_string()
        } else {
            responses.remove(0)
        };
        Ok(Response {
            status: 200,
            headers: Default::default(),
            body,
        })
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, uri: &str) -> Result<Response, TransportError> {
        self.record("GET", uri, None)
    }

    async fn post(&self, uri: &str, body: Value) -> Result<Response, TransportError> {
        self.record("POST", uri, Some(body))
    }

    async fn put(&self, uri: &str, body: Value) -> Result<Response, TransportError> {
        self.record("PUT", uri, Some(body))
    }

    async fn delete(&self, uri: &str, body: Option<Value>) -> Result<Response, TransportError> {
        self.record("DELETE", uri, body)
    }
}

/// Client wired to a fresh recording transport.
#[allow(dead_code)]
pub fn test_client() -> (ProfileClient, Arc<RecordingTransport>) {
    let settings = ClientSettings::new("https://api.baasic.com", "test-app");
    test_client_with_settings(&settings)
}

/// Same, with caller-controlled settings (batch remove style etc.).
#[allow(dead_code)]
pub fn test_client_with_settings(
    settings: &ClientSettings,
) -> (ProfileClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let client = ProfileClient::with_transport(settings, transport.clone())
        .expect("route tables must build");
    (client, transport)
}
