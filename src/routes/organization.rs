// Organization lookup routes

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::{template, BatchRoutes};

#[derive(Debug, Clone)]
pub struct OrganizationRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
    pub batch: BatchRoutes,
}

impl OrganizationRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template("lookups/organizations/{?searchQuery,page,rpp,sort,embed,fields}")?,
            get: template("lookups/organizations/{id}/{?embed,fields}")?,
            create: template("lookups/organizations")?,
            batch: BatchRoutes {
                root: template("lookups/organizations/batch")?,
                remove: template("lookups/organizations/batch/{organizationIds}")?,
                ids_variable: "organizationIds",
            },
        })
    }
}
