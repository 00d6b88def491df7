// Default transport backed by reqwest

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::{Response, Transport, TransportError};

/// Executes requests against the configured API root.
///
/// Relative URIs produced by route expansion or HAL links are joined
/// onto the root; absolute hrefs pass through the join untouched.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    api_root: Url,
}

impl ReqwestTransport {
    /// `api_root` must end with a trailing slash, otherwise the last
    /// path segment is dropped by relative-URI joining.
    pub fn new(api_root: &str) -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::new(),
            api_root: Url::parse(api_root)?,
        })
    }

    fn absolute(&self, uri: &str) -> Result<Url, TransportError> {
        Ok(self.api_root.join(uri)?)
    }

    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, TransportError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::warn!(status, "request rejected by backend");
            return Err(TransportError::Status { status, body });
        }

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, uri: &str) -> Result<Response, TransportError> {
        let target = self.absolute(uri)?;
        tracing::debug!(%target, "GET");
        self.execute(self.client.get(target)).await
    }

    async fn post(&self, uri: &str, body: Value) -> Result<Response, TransportError> {
        let target = self.absolute(uri)?;
        tracing::debug!(%target, "POST");
        self.execute(self.client.post(target).json(&body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> Result<Response, TransportError> {
        let target = self.absolute(uri)?;
        tracing::debug!(%target, "PUT");
        self.execute(self.client.put(target).json(&body)).await
    }

    async fn delete(&self, uri: &str, body: Option<Value>) -> Result<Response, TransportError> {
        let target = self.absolute(uri)?;
        tracing::debug!(%target, "DELETE");
        let mut request = self.client.delete(target);
        if let Some(body) = body {
            request = request.json(&body);
        }
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_uri_joins_onto_api_root() {
        let transport = ReqwestTransport::new("https://api.baasic.com/v1/my-app/").unwrap();
        let target = transport.absolute("profiles/42/?embed=user").unwrap();
        assert_eq!(
            target.as_str(),
            "https://api.baasic.com/v1/my-app/profiles/42/?embed=user"
        );
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let transport = ReqwestTransport::new("https://api.baasic.com/v1/my-app/").unwrap();
        let target = transport
            .absolute("https://cdn.baasic.com/avatars/7")
            .unwrap();
        assert_eq!(target.as_str(), "https://cdn.baasic.com/avatars/7");
    }

    #[test]
    fn test_invalid_api_root_fails() {
        assert!(ReqwestTransport::new("not a url").is_err());
    }
}
