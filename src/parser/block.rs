//! Block classification and line folding.
//!
//! Classification looks only at the trailing declaration line; no semantic
//! analysis is performed. The fold walks the block's lines once, in order,
//! so later tags overwrite earlier ones (`@info`, `@returns`, `@example`)
//! or accumulate (`@param`, `@property`).

use crate::model::{FunctionRecord, StructureRecord};
use crate::parser::tags::{self, Tag};
use crate::parser::Patterns;

/// One classified and fully parsed block.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBlock {
    Function(FunctionRecord),
    Method {
        /// Receiver type name, stripped of any pointer marker.
        owner: String,
        record: FunctionRecord,
    },
    Structure(StructureRecord),
}

enum Kind {
    Function { name: String },
    Method { owner: String, name: String },
    Structure { name: String },
}

/// Parse one matched block (comment text plus trailing declaration line).
/// Returns `None` when the trailing line is neither a `func` nor a `type`
/// declaration.
pub fn parse_block(patterns: &Patterns, text: &str) -> Option<ParsedBlock> {
    let trailing = text.lines().last()?.trim();
    match classify(trailing)? {
        Kind::Function { name } => {
            let record = fold_function(patterns, text, name);
            Some(ParsedBlock::Function(record))
        }
        Kind::Method { owner, name } => {
            let record = fold_function(patterns, text, name);
            Some(ParsedBlock::Method { owner, record })
        }
        Kind::Structure { name } => {
            let record = fold_structure(patterns, text, name);
            Some(ParsedBlock::Structure(record))
        }
    }
}

// -- Classification -----------------------------------------------------------

fn classify(trailing: &str) -> Option<Kind> {
    if let Some(rest) = trailing.strip_prefix("func") {
        let rest = rest.trim_start();
        if let Some((owner, name)) = method_parts(rest) {
            return Some(Kind::Method { owner, name });
        }
        return function_name(rest).map(|name| Kind::Function { name });
    }
    if let Some(rest) = trailing.strip_prefix("type") {
        let name = rest.split_whitespace().find(|w| *w != "type")?;
        return Some(Kind::Structure {
            name: name.to_string(),
        });
    }
    None
}

/// Split a receiver clause `(ident Type)` off the declaration remainder.
/// Returns the owning structure name (pointer marker stripped) and the
/// method name, or `None` when the remainder is not a method declaration.
fn method_parts(rest: &str) -> Option<(String, String)> {
    let inner = rest.strip_prefix('(')?;
    let (clause, after) = inner.split_once(')')?;
    let mut words = clause.split_whitespace();
    words.next()?;
    let receiver_type = words.next()?;
    let owner = receiver_type.trim_start_matches('*').to_string();
    let name = function_name(after.trim_start())?;
    Some((owner, name))
}

/// First word after the keyword that is not a parenthesized clause,
/// truncated at the first `(`.
fn function_name(rest: &str) -> Option<String> {
    let mut rest = rest.trim_start();
    if let Some(inner) = rest.strip_prefix('(') {
        if let Some((_, after)) = inner.split_once(')') {
            rest = after.trim_start();
        }
    }
    let word = rest.split_whitespace().next()?;
    let name = word.split('(').next().unwrap_or(word);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Declaration line with the trailing `{` stripped.
fn signature(line: &str) -> String {
    line.trim().trim_end_matches('{').trim().to_string()
}

// -- Folding ------------------------------------------------------------------

enum ExampleState {
    Idle,
    /// Saw `@example`, waiting for the opening fence.
    Armed,
    Capturing(Vec<String>),
}

fn fold_function(patterns: &Patterns, text: &str, name: String) -> FunctionRecord {
    let mut record = FunctionRecord {
        name,
        ..FunctionRecord::default()
    };
    let mut example = ExampleState::Idle;

    for line in text.lines() {
        let trimmed = line.trim();

        match example {
            ExampleState::Capturing(ref mut captured) => {
                if patterns.fence.is_match(line) {
                    record.example = Some(captured.join("\n"));
                    example = ExampleState::Idle;
                } else {
                    captured.push(line.to_string());
                }
                continue;
            }
            ExampleState::Armed => {
                if patterns.fence.is_match(line) {
                    example = ExampleState::Capturing(Vec::new());
                    continue;
                }
                if trimmed.starts_with('@') {
                    // No fence followed the tag; give up and parse normally.
                    example = ExampleState::Idle;
                }
            }
            ExampleState::Idle => {}
        }

        if trimmed.starts_with("func") {
            record.line = signature(trimmed);
        } else if trimmed.starts_with("@info") {
            record.description = trimmed.replacen("@info", "", 1).trim().to_string();
        } else if trimmed.starts_with("@param") {
            record
                .parameters
                .push(tags::parse_field(patterns, trimmed, Tag::Param));
        } else if trimmed.starts_with("@returns") {
            record.returns = Some(tags::parse_field(patterns, trimmed, Tag::Returns));
        } else if trimmed.starts_with("@example") {
            example = ExampleState::Armed;
        }
    }

    record
}

fn fold_structure(patterns: &Patterns, text: &str, name: String) -> StructureRecord {
    let mut record = StructureRecord {
        name,
        ..StructureRecord::default()
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("type") {
            record.line = signature(trimmed);
        } else if trimmed.starts_with("@info") {
            record.description = trimmed.replacen("@info", "", 1).trim().to_string();
        } else if trimmed.starts_with("@property") {
            record
                .properties
                .push(tags::parse_field(patterns, trimmed, Tag::Property));
        }
    }

    record
}
