// Per-resource services
//
// Reads and creates expand route templates; updates and removes follow
// the HAL links embedded in fetched resources. Services never branch on
// status codes — non-success responses are rejected by the transport.

mod avatar;
mod company;
mod education;
mod options;
mod organization;
mod profile;
mod skill;
mod user_skill;
mod work;

pub use avatar::{AvatarService, StreamOptions};
pub use company::CompanyService;
pub use education::EducationService;
pub use options::{AclOptions, FindOptions, GetOptions, OrderDirection};
pub use organization::OrganizationService;
pub use profile::ProfileService;
pub use skill::SkillService;
pub use user_skill::UserSkillService;
pub use work::WorkService;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::transport::Response;

pub(crate) fn decode<T: DeserializeOwned>(response: &Response) -> Result<T> {
    Ok(serde_json::from_str(&response.body)?)
}
