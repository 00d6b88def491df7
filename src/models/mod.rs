// Wire-shaped resource models
//
// Field names follow the backend's camelCase JSON; absent fields are
// skipped on serialization so partial resources round-trip cleanly.
// Every fetched resource carries a `links` map used by the services for
// update/remove targets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::links::{HalResource, Links};

/// Paged collection shape returned by every find operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResult<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub records_per_page: u32,
    #[serde(default)]
    pub total_records: u64,
    #[serde(default)]
    pub item: Vec<T>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// Lookup skill (the shared catalog, not a profile's own skill list).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub skill_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEducation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub organization_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// One entry of a profile's work history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// One ACL policy: an action granted to a user or a role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

macro_rules! hal_resource {
    ($($model:ty),+ $(,)?) => {
        $(
            impl HalResource for $model {
                fn links(&self) -> &Links {
                    &self.links
                }

                fn resource_id(&self) -> Option<&str> {
                    self.id.as_deref()
                }
            }
        )+
    };
}

hal_resource!(
    UserProfile,
    Organization,
    Company,
    Skill,
    UserSkill,
    UserEducation,
    UserWork,
    Avatar,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_deserializes_wire_shape() {
        let json = r#"{
            "id": "42",
            "name": "Acme",
            "slug": "acme",
            "links": {
                "put": {"href": "lookups/organizations/42"},
                "delete": {"href": "lookups/organizations/42"}
            }
        }"#;
        let organization: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(organization.id.as_deref(), Some("42"));
        assert_eq!(organization.name, "Acme");
        assert_eq!(
            organization.links.get("put").unwrap().href,
            "lookups/organizations/42"
        );
    }

    #[test]
    fn test_absent_fields_are_skipped_on_serialize() {
        let organization = Organization {
            name: "Acme".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&organization).unwrap();
        assert_eq!(json, r#"{"name":"Acme"}"#);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let profile = UserProfile {
            display_name: Some("acme-admin".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"displayName\""));
        assert!(!json.contains("display_name"));
    }

    #[test]
    fn test_collection_result_deserializes() {
        let json = r#"{
            "page": 1,
            "recordsPerPage": 10,
            "totalRecords": 2,
            "item": [{"name": "Acme"}, {"name": "Initech"}]
        }"#;
        let collection: CollectionResult<Organization> = serde_json::from_str(json).unwrap();
        assert_eq!(collection.page, 1);
        assert_eq!(collection.records_per_page, 10);
        assert_eq!(collection.total_records, 2);
        assert_eq!(collection.item.len(), 2);
    }

    #[test]
    fn test_collection_result_tolerates_missing_counts() {
        let collection: CollectionResult<Skill> = serde_json::from_str(r#"{"item": []}"#).unwrap();
        assert_eq!(collection.total_records, 0);
        assert!(collection.item.is_empty());
    }
}
