// Profile avatar service
//
// Fetch and link use static routes. Update and unlink follow HAL links
// like every other mutation. The stream relation is the one href that
// takes further templating: sizing parameters are appended by running
// the href back through the template engine.

use std::sync::Arc;

use crate::domain::links::{rel, resolve_link};
use crate::domain::template::{ExpansionParams, TemplateParser};
use crate::error::Result;
use crate::models::Avatar;
use crate::routes::AvatarRoutes;
use crate::transport::{Response, Transport};

use super::{decode, GetOptions};

/// Sizing options for avatar streams; unset dimensions are elided.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl StreamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    fn to_params(self) -> ExpansionParams {
        let mut params = ExpansionParams::new();
        if let Some(width) = self.width {
            params.insert("width", width);
        }
        if let Some(height) = self.height {
            params.insert("height", height);
        }
        params
    }
}

pub struct AvatarService {
    transport: Arc<dyn Transport>,
    routes: AvatarRoutes,
}

impl AvatarService {
    pub fn new(transport: Arc<dyn Transport>, routes: AvatarRoutes) -> Self {
        Self { transport, routes }
    }

    /// Fetches the avatar resource attached to a profile.
    pub async fn get(&self, profile_id: &str, options: &GetOptions) -> Result<Avatar> {
        let uri = self
            .routes
            .get
            .expand(&options.to_params().set("id", profile_id))?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    /// Associates an already-uploaded file with a profile as its avatar.
    pub async fn link(&self, profile_id: &str, data: &Avatar) -> Result<Response> {
        let uri = self
            .routes
            .link
            .expand(&ExpansionParams::new().set("id", profile_id))?;
        Ok(self.transport.post(&uri, serde_json::to_value(data)?).await?)
    }

    /// Updates via the avatar's own `put` link.
    pub async fn update(&self, data: &Avatar) -> Result<Response> {
        let uri = resolve_link(data, rel::PUT)?.to_string();
        Ok(self.transport.put(&uri, serde_json::to_value(data)?).await?)
    }

    /// Detaches the avatar via its `unlink` link. The underlying file
    /// is left in place.
    pub async fn unlink(&self, data: &Avatar) -> Result<Response> {
        let uri = resolve_link(data, rel::UNLINK)?.to_string();
        Ok(self.transport.delete(&uri, None).await?)
    }

    /// Target URI of the avatar's `stream` link with optional sizing
    /// parameters appended.
    pub fn stream_uri(&self, data: &Avatar, options: &StreamOptions) -> Result<String> {
        let href = resolve_link(data, rel::STREAM)?;
        let template = TemplateParser::parse(&format!("{href}{{?width,height}}"))?;
        template.expand(&options.to_params())
    }

    /// Fetches the avatar image bytes, optionally resized.
    pub async fn stream(&self, data: &Avatar, options: &StreamOptions) -> Result<Response> {
        let uri = self.stream_uri(data, options)?;
        Ok(self.transport.get(&uri).await?)
    }
}
