//! Block extraction and parsing for tagged doc comments.
//!
//! A "block" is a `/* ... */` comment immediately followed (after only line
//! breaks) by one non-blank source line. The trailing line decides whether
//! the block documents a function, a method, or a structure.

pub mod block;
pub mod tags;

use block::ParsedBlock;
use regex::Regex;

/// Compiled patterns, built once at startup and passed by reference into
/// the parsing functions.
pub struct Patterns {
    /// Block comment plus its trailing declaration line.
    block: Regex,
    /// `{...}` type token.
    type_token: Regex,
    /// `[...]` name token — letters and `.` for qualified names.
    name_token: Regex,
    /// Example fence: a line of 3 or more backticks.
    fence: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            block: Regex::new(r"/\*[\s\S]*?\*/[\r\n]+([^\r\n]+)").unwrap(),
            type_token: Regex::new(r"\{.*?\}").unwrap(),
            name_token: Regex::new(r"\[[a-zA-Z.]+\]").unwrap(),
            fence: Regex::new(r"^\s*`{3,}\s*$").unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract and parse every documented block in a file's content, in
/// textual order. Blocks whose trailing line is neither a function nor a
/// type declaration are skipped.
pub fn parse(patterns: &Patterns, content: &str) -> Vec<ParsedBlock> {
    patterns
        .block
        .find_iter(content)
        .filter_map(|m| block::parse_block(patterns, m.as_str()))
        .collect()
}
