// RFC6570-subset URI templating
//
// This module provides parsing and expansion of the route templates the
// backend publishes: simple substitution `{name}` and query-string
// expansion groups `{?a,b,c}`.

mod ast;
mod expand;
mod params;
mod parser;

pub use ast::UriTemplate;
pub use params::{ExpansionParams, ParamValue};
pub use parser::TemplateParser;
