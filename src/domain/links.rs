// HAL link map and relation resolution
//
// Fetched resources embed a map of named links; mutation targets are
// taken from those links, never rebuilt from route templates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Well-known relation names issued by the backend.
pub mod rel {
    pub const PUT: &str = "put";
    pub const DELETE: &str = "delete";
    pub const UNLINK: &str = "unlink";
    pub const STREAM: &str = "stream";
}

/// A single hypermedia link descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Relation name -> link map embedded in fetched resources.
///
/// Which relations are present depends on the caller's access rights;
/// the backend omits links for operations it will not permit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(HashMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builder-style insert mirroring the wire shape.
    pub fn with(mut self, rel: &str, href: &str) -> Self {
        self.0.insert(
            rel.to_string(),
            Link {
                href: href.to_string(),
            },
        );
        self
    }
}

/// A fetched resource carrying hypermedia links.
pub trait HalResource {
    fn links(&self) -> &Links;

    /// Identifier used in diagnostics; None for unsaved resources.
    fn resource_id(&self) -> Option<&str>;
}

/// Resolve `rel` on `resource` to its target URI.
///
/// The href is returned exactly as issued by the backend; no further
/// templating is applied here. A missing relation means the backend
/// withheld the operation for this caller, and no request must be made.
pub fn resolve_link<'a, R: HalResource>(resource: &'a R, rel: &str) -> Result<&'a str> {
    match resource.links().get(rel) {
        Some(link) => Ok(&link.href),
        None => {
            tracing::warn!(rel, id = resource.resource_id(), "link relation absent on resource");
            Err(Error::LinkNotFound {
                rel: rel.to_string(),
                id: resource.resource_id().map(str::to_string),
            })
        }
    }
}
