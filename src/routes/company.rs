// Company lookup routes

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::{template, BatchRoutes};

#[derive(Debug, Clone)]
pub struct CompanyRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
    pub batch: BatchRoutes,
}

impl CompanyRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template("lookups/companies/{?searchQuery,page,rpp,sort,embed,fields}")?,
            get: template("lookups/companies/{id}/{?embed,fields}")?,
            create: template("lookups/companies")?,
            batch: BatchRoutes {
                root: template("lookups/companies/batch")?,
                remove: template("lookups/companies/batch/{companyIds}")?,
                ids_variable: "companyIds",
            },
        })
    }
}
