//! Annotation line parsing — `@param {type} [name] description` and friends.
//!
//! Parsing is permissive: a missing `{...}` or `[...]` token yields an empty
//! field component, never an error. When a line carries more than one
//! candidate token, the last match wins.

use crate::model::Field;
use crate::parser::Patterns;

/// Field-bearing annotation keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Param,
    Property,
    Returns,
}

impl Tag {
    pub fn keyword(self) -> &'static str {
        match self {
            Tag::Param => "@param",
            Tag::Property => "@property",
            Tag::Returns => "@returns",
        }
    }

    /// `@returns` carries no `[name]` token.
    fn has_name(self) -> bool {
        !matches!(self, Tag::Returns)
    }
}

/// Extract the `{...}` type token from a line. Returns the inner text and
/// the line with every occurrence of the token removed. No token ⇒ empty
/// type, line unchanged.
pub fn extract_type(patterns: &Patterns, line: &str) -> (String, String) {
    extract_token(&patterns.type_token, line)
}

/// Extract the `[...]` name token from a line. Same contract as
/// [`extract_type`].
pub fn extract_name(patterns: &Patterns, line: &str) -> (String, String) {
    extract_token(&patterns.name_token, line)
}

fn extract_token(pattern: &regex::Regex, line: &str) -> (String, String) {
    match pattern.find_iter(line).last() {
        Some(m) => {
            let token = m.as_str();
            let inner = token[1..token.len() - 1].to_string();
            (inner, line.replace(token, ""))
        }
        None => (String::new(), line.to_string()),
    }
}

/// Parse one annotation line into a [`Field`]: strip the tag keyword,
/// extract the type, extract the name (except for `@returns`), and trim
/// what remains as the description.
pub fn parse_field(patterns: &Patterns, line: &str, tag: Tag) -> Field {
    let line = line.replacen(tag.keyword(), "", 1);
    let (r#type, line) = extract_type(patterns, &line);
    let (name, line) = if tag.has_name() {
        extract_name(patterns, &line)
    } else {
        (String::new(), line)
    };
    Field {
        r#type,
        name,
        description: line.trim().to_string(),
    }
}
