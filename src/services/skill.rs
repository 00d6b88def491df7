// Skill lookup service

use std::sync::Arc;

use serde_json::json;

use crate::config::BatchRemoveStyle;
use crate::domain::links::{rel, resolve_link};
use crate::domain::template::ExpansionParams;
use crate::error::Result;
use crate::models::{CollectionResult, Skill};
use crate::routes::SkillRoutes;
use crate::transport::{Response, Transport};

use super::{decode, FindOptions, GetOptions};

pub struct SkillService {
    transport: Arc<dyn Transport>,
    routes: SkillRoutes,
    batch_remove: BatchRemoveStyle,
}

impl SkillService {
    pub fn new(
        transport: Arc<dyn Transport>,
        routes: SkillRoutes,
        batch_remove: BatchRemoveStyle,
    ) -> Self {
        Self {
            transport,
            routes,
            batch_remove,
        }
    }

    pub async fn find(&self, options: &FindOptions) -> Result<CollectionResult<Skill>> {
        let uri = self.routes.find.expand(&options.to_params())?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn get(&self, id: &str, options: &GetOptions) -> Result<Skill> {
        let uri = self.routes.get.expand(&options.to_params().set("id", id))?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn create(&self, data: &Skill) -> Result<Skill> {
        let uri = self.routes.create.expand(&ExpansionParams::new())?;
        let response = self.transport.post(&uri, serde_json::to_value(data)?).await?;
        decode(&response)
    }

    /// Updates via the resource's own `put` link.
    pub async fn update(&self, data: &Skill) -> Result<Response> {
        let uri = resolve_link(data, rel::PUT)?.to_string();
        Ok(self.transport.put(&uri, serde_json::to_value(data)?).await?)
    }

    /// Removes via the resource's own `delete` link.
    pub async fn remove(&self, data: &Skill) -> Result<Response> {
        let uri = resolve_link(data, rel::DELETE)?.to_string();
        Ok(self.transport.delete(&uri, None).await?)
    }

    pub async fn batch_create(&self, data: &[Skill]) -> Result<Response> {
        let uri = self.routes.batch.root.expand(&ExpansionParams::new())?;
        Ok(self.transport.post(&uri, serde_json::to_value(data)?).await?)
    }

    pub async fn batch_update(&self, data: &[Skill]) -> Result<Response> {
        let uri = self.routes.batch.root.expand(&ExpansionParams::new())?;
        Ok(self.transport.post(&uri, serde_json::to_value(data)?).await?)
    }

    pub async fn batch_remove(&self, ids: &[String]) -> Result<Response> {
        match self.batch_remove {
            BatchRemoveStyle::PathIds => {
                let params =
                    ExpansionParams::new().set(self.routes.batch.ids_variable, ids);
                let uri = self.routes.batch.remove.expand(&params)?;
                Ok(self.transport.delete(&uri, None).await?)
            }
            BatchRemoveStyle::BodyIds => {
                let uri = self.routes.batch.root.expand(&ExpansionParams::new())?;
                Ok(self.transport.delete(&uri, Some(json!(ids))).await?)
            }
        }
    }
}
