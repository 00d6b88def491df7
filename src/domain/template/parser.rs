// Route template parser using recursive descent

use crate::error::{Error, Result};

use super::ast::{TemplatePart, UriTemplate};

pub struct TemplateParser {
    input: String,
    pos: usize,
}

impl TemplateParser {
    /// Pure string analysis — no network contact, no URI validation.
    /// Fails only on syntactically malformed templates.
    pub fn parse(template: &str) -> Result<UriTemplate> {
        let mut parser = Self {
            input: template.to_string(),
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Result<UriTemplate> {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while self.pos < self.input.len() {
            match self.peek_char() {
                Some('{') => {
                    // Start of expression - flush literal buffer first
                    if !literal_buf.is_empty() {
                        parts.push(TemplatePart::Literal(literal_buf.clone()));
                        literal_buf.clear();
                    }
                    parts.push(self.parse_expression()?);
                }
                Some('}') => {
                    return Err(self.malformed("unexpected closing brace"));
                }
                _ => literal_buf.push(self.consume_char()?),
            }
        }

        // Flush remaining literal
        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Ok(UriTemplate::new(parts))
    }

    fn parse_expression(&mut self) -> Result<TemplatePart> {
        self.expect_char('{')?;

        let part = if self.peek_char() == Some('?') {
            self.consume_char()?;
            let mut names = vec![self.parse_variable_name()?];
            while self.peek_char() == Some(',') {
                self.consume_char()?;
                names.push(self.parse_variable_name()?);
            }
            TemplatePart::Query(names)
        } else {
            TemplatePart::Simple(self.parse_variable_name()?)
        };

        self.expect_char('}')?;
        Ok(part)
    }

    fn parse_variable_name(&mut self) -> Result<String> {
        let mut name = String::new();

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(self.consume_char()?);
            } else if ch == ',' || ch == '}' {
                break;
            } else {
                return Err(self.malformed(&format!("invalid character '{ch}' in variable name")));
            }
        }

        if name.is_empty() {
            return Err(self.malformed("empty variable name"));
        }
        Ok(name)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Result<char> {
        let ch = self
            .peek_char()
            .ok_or_else(|| self.malformed("unexpected end of input"))?;
        self.pos += ch.len_utf8();
        Ok(ch)
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.consume_char()?;
                Ok(())
            }
            Some(ch) => Err(self.malformed(&format!("expected '{expected}' but found '{ch}'"))),
            None => Err(self.malformed(&format!("expected '{expected}' but found end of input"))),
        }
    }

    fn malformed(&self, message: &str) -> Error {
        Error::Parse {
            position: self.pos,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only() {
        let template = TemplateParser::parse("profiles").unwrap();
        assert_eq!(template.parts, vec![TemplatePart::Literal("profiles".to_string())]);
    }

    #[test]
    fn test_parse_simple_variable() {
        let template = TemplateParser::parse("lookups/organizations/{id}").unwrap();
        assert_eq!(
            template.parts,
            vec![
                TemplatePart::Literal("lookups/organizations/".to_string()),
                TemplatePart::Simple("id".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_group() {
        let template = TemplateParser::parse("profiles/{?searchQuery,page,rpp,sort}").unwrap();
        assert_eq!(
            template.parts,
            vec![
                TemplatePart::Literal("profiles/".to_string()),
                TemplatePart::Query(vec![
                    "searchQuery".to_string(),
                    "page".to_string(),
                    "rpp".to_string(),
                    "sort".to_string(),
                ]),
            ]
        );
    }

    #[test]
    fn test_parse_mixed_simple_and_query() {
        let template = TemplateParser::parse("profiles/{id}/{?embed,fields}").unwrap();
        assert_eq!(template.parts.len(), 4);
        assert_eq!(template.variables(), vec!["id", "embed", "fields"]);
    }

    #[test]
    fn test_parse_multiple_simple_variables() {
        let template =
            TemplateParser::parse("profiles/{id}/acl/actions/{accessAction}/users/{user}/")
                .unwrap();
        assert_eq!(template.variables(), vec!["id", "accessAction", "user"]);
    }

    #[test]
    fn test_parse_unbalanced_open_brace_fails() {
        let result = TemplateParser::parse("profiles/{id");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_stray_closing_brace_fails() {
        let result = TemplateParser::parse("profiles/id}");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_variable_name_fails() {
        let result = TemplateParser::parse("profiles/{}");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_query_name_fails() {
        let result = TemplateParser::parse("profiles/{?a,}");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_invalid_character_fails() {
        let result = TemplateParser::parse("profiles/{i d}");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid character"));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = TemplateParser::parse("profiles/{id}/{?embed,fields}").unwrap();
        let second = TemplateParser::parse("profiles/{id}/{?embed,fields}").unwrap();
        assert_eq!(first, second);
    }
}
