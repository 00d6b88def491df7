// Skill lookup routes
//
// The skill catalog lives under the profile module's lookup prefix,
// unlike organizations and companies.

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::{template, BatchRoutes};

#[derive(Debug, Clone)]
pub struct SkillRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
    pub batch: BatchRoutes,
}

impl SkillRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template("profile/lookups/skills/{?searchQuery,page,rpp,sort,embed,fields}")?,
            get: template("profile/lookups/skills/{id}/{?embed,fields}")?,
            create: template("profile/lookups/skills")?,
            batch: BatchRoutes {
                root: template("profile/lookups/skills/batch")?,
                remove: template("profile/lookups/skills/batch/{skillIds}")?,
                ids_variable: "skillIds",
            },
        })
    }
}
