// Typed client for the Baasic user-profile REST module.
//
// Route tables expand URI templates for reads and creates; updates and
// removes always follow the hypermedia links the backend embeds in
// fetched resources, so mutation targets are server-asserted, never
// client-constructed.

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod transport;

pub use config::{BatchRemoveStyle, ClientSettings};
pub use error::{Error, Result};
pub use services::{AclOptions, FindOptions, GetOptions, OrderDirection, StreamOptions};
pub use transport::{ReqwestTransport, Transport};

use std::sync::Arc;

use routes::{
    AvatarRoutes, CompanyRoutes, EducationRoutes, OrganizationRoutes, ProfileRoutes, SkillRoutes,
    UserSkillRoutes, WorkRoutes,
};
use services::{
    AvatarService, CompanyService, EducationService, OrganizationService, ProfileService,
    SkillService, UserSkillService, WorkService,
};

/// Entry point wiring every per-resource service to one shared
/// transport. Collaborators are passed in explicitly; there is no
/// process-wide registry.
pub struct ProfileClient {
    pub profiles: ProfileService,
    pub organizations: OrganizationService,
    pub companies: CompanyService,
    pub skills: SkillService,
    pub user_skills: UserSkillService,
    pub educations: EducationService,
    pub work: WorkService,
    pub avatars: AvatarService,
}

impl ProfileClient {
    /// Builds a client with the default reqwest transport pointed at
    /// `settings.api_root()`.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(&settings.api_root())?);
        Self::with_transport(settings, transport)
    }

    /// Builds a client over any transport implementation. Route tables
    /// are parsed here; a malformed template literal fails construction.
    pub fn with_transport(
        settings: &ClientSettings,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            profiles: ProfileService::new(transport.clone(), ProfileRoutes::new()?),
            organizations: OrganizationService::new(
                transport.clone(),
                OrganizationRoutes::new()?,
                settings.batch_remove,
            ),
            companies: CompanyService::new(
                transport.clone(),
                CompanyRoutes::new()?,
                settings.batch_remove,
            ),
            skills: SkillService::new(
                transport.clone(),
                SkillRoutes::new()?,
                settings.batch_remove,
            ),
            user_skills: UserSkillService::new(transport.clone(), UserSkillRoutes::new()?),
            educations: EducationService::new(transport.clone(), EducationRoutes::new()?),
            work: WorkService::new(transport.clone(), WorkRoutes::new()?),
            avatars: AvatarService::new(transport, AvatarRoutes::new()?),
        })
    }
}
