// Per-profile skill service

use std::sync::Arc;

use crate::domain::links::{rel, resolve_link};
use crate::domain::template::ExpansionParams;
use crate::error::Result;
use crate::models::{CollectionResult, UserSkill};
use crate::routes::UserSkillRoutes;
use crate::transport::{Response, Transport};

use super::{decode, FindOptions, GetOptions};

pub struct UserSkillService {
    transport: Arc<dyn Transport>,
    routes: UserSkillRoutes,
}

impl UserSkillService {
    pub fn new(transport: Arc<dyn Transport>, routes: UserSkillRoutes) -> Self {
        Self { transport, routes }
    }

    pub async fn find(
        &self,
        user_id: &str,
        options: &FindOptions,
    ) -> Result<CollectionResult<UserSkill>> {
        let uri = self
            .routes
            .find
            .expand(&options.to_params().set("userId", user_id))?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn get(&self, user_id: &str, id: &str, options: &GetOptions) -> Result<UserSkill> {
        let params = options.to_params().set("userId", user_id).set("id", id);
        let uri = self.routes.get.expand(&params)?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn create(&self, user_id: &str, data: &UserSkill) -> Result<UserSkill> {
        let uri = self
            .routes
            .create
            .expand(&ExpansionParams::new().set("userId", user_id))?;
        let response = self.transport.post(&uri, serde_json::to_value(data)?).await?;
        decode(&response)
    }

    /// Updates via the resource's own `put` link.
    pub async fn update(&self, data: &UserSkill) -> Result<Response> {
        let uri = resolve_link(data, rel::PUT)?.to_string();
        Ok(self.transport.put(&uri, serde_json::to_value(data)?).await?)
    }

    /// Removes via the resource's own `delete` link.
    pub async fn remove(&self, data: &UserSkill) -> Result<Response> {
        let uri = resolve_link(data, rel::DELETE)?.to_string();
        Ok(self.transport.delete(&uri, None).await?)
    }
}
