// Route tables: named, pre-parsed URI templates per resource
//
// Each table is built once at client construction and is immutable and
// shared for the client's lifetime. A malformed template literal fails
// construction; there is no lazy parsing at call time.

mod avatar;
mod company;
mod education;
mod organization;
mod profile;
mod skill;
mod user_skill;
mod work;

pub use avatar::AvatarRoutes;
pub use company::CompanyRoutes;
pub use education::EducationRoutes;
pub use organization::OrganizationRoutes;
pub use profile::{AclRoutes, ProfileRoutes};
pub use skill::SkillRoutes;
pub use user_skill::UserSkillRoutes;
pub use work::WorkRoutes;

use crate::domain::template::{TemplateParser, UriTemplate};
use crate::error::Result;

pub(crate) fn template(route: &str) -> Result<UriTemplate> {
    TemplateParser::parse(route)
}

/// Batch sub-routes shared by the lookup resources.
#[derive(Debug, Clone)]
pub struct BatchRoutes {
    /// Fixed batch route; create, update, and body-style remove all
    /// target it.
    pub root: UriTemplate,
    /// Path-templated remove route consuming a comma-joined id list.
    pub remove: UriTemplate,
    /// Name of the id-list variable in `remove`.
    pub(crate) ids_variable: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_table_builds() {
        assert!(ProfileRoutes::new().is_ok());
        assert!(OrganizationRoutes::new().is_ok());
        assert!(CompanyRoutes::new().is_ok());
        assert!(SkillRoutes::new().is_ok());
        assert!(UserSkillRoutes::new().is_ok());
        assert!(EducationRoutes::new().is_ok());
        assert!(WorkRoutes::new().is_ok());
        assert!(AvatarRoutes::new().is_ok());
    }
}
