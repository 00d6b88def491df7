// User profile service

use std::sync::Arc;

use crate::domain::links::{rel, resolve_link};
use crate::domain::template::ExpansionParams;
use crate::error::Result;
use crate::models::{AclPolicy, CollectionResult, UserProfile};
use crate::routes::ProfileRoutes;
use crate::transport::{Response, Transport};

use super::{decode, AclOptions, FindOptions, GetOptions};

pub struct ProfileService {
    transport: Arc<dyn Transport>,
    routes: ProfileRoutes,
}

impl ProfileService {
    pub fn new(transport: Arc<dyn Transport>, routes: ProfileRoutes) -> Self {
        Self { transport, routes }
    }

    /// Lists user profiles matching the given criteria.
    pub async fn find(&self, options: &FindOptions) -> Result<CollectionResult<UserProfile>> {
        let uri = self.routes.find.expand(&options.to_params())?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn get(&self, id: &str, options: &GetOptions) -> Result<UserProfile> {
        let uri = self.routes.get.expand(&options.to_params().set("id", id))?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    pub async fn create(&self, data: &UserProfile) -> Result<UserProfile> {
        let uri = self.routes.create.expand(&ExpansionParams::new())?;
        let response = self.transport.post(&uri, serde_json::to_value(data)?).await?;
        decode(&response)
    }

    /// Updates via the profile's own `put` link. The target is
    /// server-asserted; the static route table is never consulted.
    pub async fn update(&self, data: &UserProfile) -> Result<Response> {
        let uri = resolve_link(data, rel::PUT)?.to_string();
        Ok(self.transport.put(&uri, serde_json::to_value(data)?).await?)
    }

    /// Removes via the profile's own `delete` link.
    pub async fn remove(&self, data: &UserProfile) -> Result<Response> {
        let uri = resolve_link(data, rel::DELETE)?.to_string();
        Ok(self.transport.delete(&uri, None).await?)
    }

    /// Lists the ACL policies established for a profile.
    pub async fn acl_get(
        &self,
        profile_id: &str,
        options: &AclOptions,
    ) -> Result<Vec<AclPolicy>> {
        let uri = self
            .routes
            .acl
            .get
            .expand(&options.to_params().set("id", profile_id))?;
        let response = self.transport.get(&uri).await?;
        decode(&response)
    }

    /// Replaces the ACL policies for a profile.
    pub async fn acl_update(
        &self,
        profile_id: &str,
        policies: &[AclPolicy],
    ) -> Result<Response> {
        let uri = self
            .routes
            .acl
            .update
            .expand(&ExpansionParams::new().set("id", profile_id))?;
        Ok(self
            .transport
            .put(&uri, serde_json::to_value(policies)?)
            .await?)
    }

    /// Deletes the ACL policy binding `access_action` to `user` on the
    /// given profile.
    pub async fn acl_remove_by_user(
        &self,
        profile_id: &str,
        access_action: &str,
        user: &str,
    ) -> Result<Response> {
        let params = ExpansionParams::new()
            .set("id", profile_id)
            .set("accessAction", access_action)
            .set("user", user);
        let uri = self.routes.acl.delete_by_user.expand(&params)?;
        Ok(self.transport.delete(&uri, None).await?)
    }

    /// Deletes the ACL policy binding `access_action` to `role` on the
    /// given profile.
    pub async fn acl_remove_by_role(
        &self,
        profile_id: &str,
        access_action: &str,
        role: &str,
    ) -> Result<Response> {
        let params = ExpansionParams::new()
            .set("id", profile_id)
            .set("accessAction", access_action)
            .set("role", role);
        let uri = self.routes.acl.delete_by_role.expand(&params)?;
        Ok(self.transport.delete(&uri, None).await?)
    }
}
