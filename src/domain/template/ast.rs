// Parsed representation of a route template

/// A parsed URI template: literal runs interleaved with expressions.
///
/// Parsing is deterministic and idempotent — two parses of the same
/// string expand identically for the same parameters. Parsed templates
/// carry no mutable state and are safe to share across arbitrarily many
/// concurrent expansions.
#[derive(Debug, Clone, PartialEq)]
pub struct UriTemplate {
    pub(crate) parts: Vec<TemplatePart>,
}

impl UriTemplate {
    pub(crate) fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Names of every variable referenced by this template, in order.
    pub fn variables(&self) -> Vec<&str> {
        self.parts
            .iter()
            .flat_map(|part| match part {
                TemplatePart::Literal(_) => Vec::new(),
                TemplatePart::Simple(name) => vec![name.as_str()],
                TemplatePart::Query(names) => names.iter().map(String::as_str).collect(),
            })
            .collect()
    }
}

/// A template consists of literal strings and expression blocks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TemplatePart {
    Literal(String),
    /// `{name}` — replaced by the encoded value of `name`.
    Simple(String),
    /// `{?a,b,c}` — variables with a value are serialized as a query
    /// string; the rest are elided.
    Query(Vec<String>),
}
