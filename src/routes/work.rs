// Per-profile work history routes

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::template;

#[derive(Debug, Clone)]
pub struct WorkRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
}

impl WorkRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template("profiles/{userId}/work/{?searchQuery,page,rpp,sort,embed,fields}")?,
            get: template("profiles/{userId}/work/{id}/{?embed,fields}")?,
            create: template("profiles/{userId}/work")?,
        })
    }
}
