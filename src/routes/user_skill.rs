// Per-profile skill routes

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::template;

#[derive(Debug, Clone)]
pub struct UserSkillRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
}

impl UserSkillRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template("profiles/{userId}/skills/{?searchQuery,page,rpp,sort,embed,fields}")?,
            get: template("profiles/{userId}/skills/{id}/{?embed,fields}")?,
            create: template("profiles/{userId}/skills")?,
        })
    }
}
