// Profile avatar routes
//
// Only fetch and link have static routes; update, unlink, and stream
// targets come from HAL links on the fetched avatar.

use crate::domain::template::UriTemplate;
use crate::error::Result;

use super::template;

#[derive(Debug, Clone)]
pub struct AvatarRoutes {
    pub get: UriTemplate,
    pub link: UriTemplate,
}

impl AvatarRoutes {
    pub fn new() -> Result<Self> {
        Ok(Self {
            get: template("profiles/{id}/avatars/{?embed,fields}")?,
            link: template("profiles/{id}/avatars/link")?,
        })
    }
}
