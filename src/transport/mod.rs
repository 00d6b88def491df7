// HTTP transport port
//
// The services are written against the four request primitives below;
// the implementation executes the actual round-trips. Status handling,
// headers, and connection concerns all live behind this trait.

mod http;

pub use http::ReqwestTransport;

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status. The raw body is
    /// kept for debugging; the caller decides what to do with it.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid request URI: {0}")]
    InvalidUri(#[from] url::ParseError),
}

/// Raw response handed back to the caller unmodified.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// The four request primitives.
///
/// `delete` carries an optional JSON body: some backend releases take
/// batch id lists in the DELETE body, every other use passes `None`.
/// Each call resolves or rejects exactly once; nothing is retried here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, uri: &str) -> Result<Response, TransportError>;
    async fn post(&self, uri: &str, body: Value) -> Result<Response, TransportError>;
    async fn put(&self, uri: &str, body: Value) -> Result<Response, TransportError>;
    async fn delete(&self, uri: &str, body: Option<Value>) -> Result<Response, TransportError>;
}
