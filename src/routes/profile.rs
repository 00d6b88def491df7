// User profile routes

use crate::domain::template::{TemplateParser, UriTemplate};
use crate::error::Result;

use super::template;

/// Profile route templates. `find`/`get`/`create` cover the read side;
/// update and remove targets come from HAL links on fetched profiles.
#[derive(Debug, Clone)]
pub struct ProfileRoutes {
    pub find: UriTemplate,
    pub get: UriTemplate,
    pub create: UriTemplate,
    pub acl: AclRoutes,
}

/// ACL policy routes scoped to one profile.
#[derive(Debug, Clone)]
pub struct AclRoutes {
    pub get: UriTemplate,
    pub update: UriTemplate,
    pub delete_by_user: UriTemplate,
    pub delete_by_role: UriTemplate,
}

impl ProfileRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            find: template("profiles/{?searchQuery,page,rpp,sort,embed,fields}")?,
            get: template("profiles/{id}/{?embed,fields}")?,
            create: template("profiles")?,
            acl: AclRoutes {
                get: template("profiles/{id}/acl/{?fields}")?,
                update: template("profiles/{id}/acl/{?fields}")?,
                delete_by_user: template(
                    "profiles/{id}/acl/actions/{accessAction}/users/{user}/",
                )?,
                delete_by_role: template(
                    "profiles/{id}/acl/actions/{accessAction}/roles/{role}/",
                )?,
            },
        })
    }

    /// Ad-hoc template parsing for routes not in the table, e.g.
    /// appending extra query options to a HAL href.
    pub fn parse(&self, route: &str) -> Result<UriTemplate> {
        TemplateParser::parse(route)
    }
}
