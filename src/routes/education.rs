// Per-profile education routes

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::template;

#[derive(Debug, Clone)]
pub struct EducationRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
}

impl EducationRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template(
                "profiles/{userId}/educations/{?searchQuery,page,rpp,sort,embed,fields}",
            )?,
            get: template("profiles/{userId}/educations/{id}/{?embed,fields}")?,
            create: template("profiles/{userId}/educations")?,
        })
    }
}
