use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Wire-format selection for batch remove, per deployment.
///
/// The two conventions appeared in different backend releases and are
/// not interchangeable; set this to match the backend you deploy
/// against instead of assuming either.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BatchRemoveStyle {
    /// Ids comma-joined into the `batch/{ids}` path template; the
    /// DELETE carries no body.
    #[default]
    PathIds,
    /// One DELETE to the fixed batch route with the id list as the
    /// JSON body.
    BodyIds,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub application: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub batch_remove: BatchRemoveStyle,
}

impl ClientSettings {
    pub fn new(base_url: &str, application: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            application: application.to_string(),
            version: None,
            batch_remove: BatchRemoveStyle::default(),
        }
    }

    pub fn with_batch_remove(mut self, style: BatchRemoveStyle) -> Self {
        self.batch_remove = style;
        self
    }

    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let yml = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&yml)?)
    }

    /// Root every relative request URI is joined onto:
    /// `<base_url>/<version>/<application>/`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.version.as_deref().unwrap_or("v1"),
            self.application
        )
    }
}
