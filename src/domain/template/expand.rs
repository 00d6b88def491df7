// Template expansion against a parameter map

use crate::error::{Error, Result};

use super::ast::{TemplatePart, UriTemplate};
use super::params::ExpansionParams;

impl UriTemplate {
    /// Expand into a concrete relative URI.
    ///
    /// Query variables without a value produce no token at all. A simple
    /// `{name}` variable without a value is `Error::MissingVariable`:
    /// route tables only place required path variables in simple
    /// positions, and an empty segment would silently yield a malformed
    /// URI like `profiles//acl/`.
    ///
    /// Expansion is a pure function of (template, params); literal
    /// segments pass through untouched, values are percent-encoded.
    pub fn expand(&self, params: &ExpansionParams) -> Result<String> {
        let mut uri = String::new();
        // First emitted query parameter gets '?', later ones '&',
        // tracked across every query group of this expansion.
        let mut has_query = false;

        for part in &self.parts {
            match part {
                TemplatePart::Literal(literal) => uri.push_str(literal),
                TemplatePart::Simple(name) => match params.get(name) {
                    Some(value) => uri.push_str(&value.encoded()),
                    None => {
                        return Err(Error::MissingVariable { name: name.clone() });
                    }
                },
                TemplatePart::Query(names) => {
                    for name in names {
                        if let Some(value) = params.get(name) {
                            uri.push(if has_query { '&' } else { '?' });
                            has_query = true;
                            uri.push_str(name);
                            uri.push('=');
                            uri.push_str(&value.encoded());
                        }
                    }
                }
            }
        }

        Ok(uri)
    }
}
