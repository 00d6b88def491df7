// Per-profile education service

use std::sync::Arc;

use crate::domain::links::{rel, resolve_link};
use crate::domain::template::ExpansionParams;
use crate::error::Result;
use crate::models::{CollectionResult, UserEducation};
use crate::routes::EducationRoutes;
use crate::transport::{Response, Transport};

use super::{decode, FindOptions, GetOptions};

pub struct EducationService {
    transport: Arc<dyn Transport>,
    routes: EducationRoutes,
}

impl EducationService {
    pub fn new(transport: Arc<dyn Transport>, routes: EducationRoutes) -> Self {
        Self { transport, routes }
    }

    pub async fn find(
        &self,
        user_id: &str,
        options: &FindOptions,
    ) -> Result<CollectionResult<UserEducation>> {
        let uri = self
            .routes
            .find
            .expand(&options.to_params().set("userId", user_id))?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn get(
        &self,
        user_id: &str,
        id: &str,
        options: &GetOptions,
    ) -> Result<UserEducation> {
        let params = options.to_params().set("userId", user_id).set("id", id);
        let uri = self.routes.get.expand(&params)?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn create(&self, user_id: &str, data: &UserEducation) -> Result<UserEducation> {
        let uri = self
            .routes
            .create
            .expand(&ExpansionParams::new().set("userId", user_id))?;
        let response = self.transport.post(&uri, serde_json::to_value(data)?).await?;
        decode(&response)
    }

    /// Updates via the resource's own `put` link.
    pub async fn update(&self, data: &UserEducation) -> Result<Response> {
        let uri = resolve_link(data, rel::PUT)?.to_string();
        Ok(self.transport.put(&uri, serde_json::to_value(data)?).await?)
    }

    /// Removes via the resource's own `delete` link.
    pub async fn remove(&self, data: &UserEducation) -> Result<Response> {
        let uri = resolve_link(data, rel::DELETE)?.to_string();
        Ok(self.transport.delete(&uri, None).await?)
    }
}
