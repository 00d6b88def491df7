// Caller-facing option objects and their wire-parameter normalization
//
// The mapping is a fixed table: search -> searchQuery,
// page_number -> page, page_size -> rpp,
// order_by + order_direction -> sort ("<field>|<asc|desc>"),
// embed and fields pass through as comma lists.

use crate::domain::template::ExpansionParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Criteria for find operations. Unset fields produce no query token.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub search: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub order_by: Option<String>,
    pub order_direction: Option<OrderDirection>,
    pub embed: Vec<String>,
    pub fields: Vec<String>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, phrase: &str) -> Self {
        self.search = Some(phrase.to_string());
        self
    }

    pub fn with_paging(mut self, page_number: u32, page_size: u32) -> Self {
        self.page_number = Some(page_number);
        self.page_size = Some(page_size);
        self
    }

    pub fn with_sort(mut self, field: &str, direction: OrderDirection) -> Self {
        self.order_by = Some(field.to_string());
        self.order_direction = Some(direction);
        self
    }

    pub fn with_embed(mut self, resources: &[&str]) -> Self {
        self.embed = resources.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|s| s.to_string()).collect();
        self
    }

    pub(crate) fn to_params(&self) -> ExpansionParams {
        let mut params = ExpansionParams::new();
        if let Some(search) = &self.search {
            params.insert("searchQuery", search.as_str());
        }
        if let Some(page) = self.page_number {
            params.insert("page", page);
        }
        if let Some(rpp) = self.page_size {
            params.insert("rpp", rpp);
        }
        if let Some(order_by) = &self.order_by {
            let direction = self.order_direction.unwrap_or(OrderDirection::Asc);
            params.insert("sort", format!("{}|{}", order_by, direction.as_str()));
        }
        if !self.embed.is_empty() {
            params.insert("embed", self.embed.clone());
        }
        if !self.fields.is_empty() {
            params.insert("fields", self.fields.clone());
        }
        params
    }
}

/// Representation options for single-resource fetches.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    pub embed: Vec<String>,
    pub fields: Vec<String>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_embed(mut self, resources: &[&str]) -> Self {
        self.embed = resources.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|s| s.to_string()).collect();
        self
    }

    pub(crate) fn to_params(&self) -> ExpansionParams {
        let mut params = ExpansionParams::new();
        if !self.embed.is_empty() {
            params.insert("embed", self.embed.clone());
        }
        if !self.fields.is_empty() {
            params.insert("fields", self.fields.clone());
        }
        params
    }
}

/// Representation options for ACL reads and updates.
#[derive(Debug, Clone, Default)]
pub struct AclOptions {
    pub fields: Vec<String>,
}

impl AclOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|s| s.to_string()).collect();
        self
    }

    pub(crate) fn to_params(&self) -> ExpansionParams {
        let mut params = ExpansionParams::new();
        if !self.fields.is_empty() {
            params.insert("fields", self.fields.clone());
        }
        params
    }
}
