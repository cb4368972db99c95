//! Data model for extracted documentation — format-agnostic.
//!
//! Serialized field names and elision rules match the original wire format:
//! PascalCase keys, empty fields omitted.

use serde::{Deserialize, Serialize};

/// One documented parameter, property, or return value.
///
/// `name` is empty for return values (`@returns` carries no `[name]` token).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Field {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A single documented function or method.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Raw declaration line with the trailing `{` stripped.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub line: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// `@param` entries, in appearance order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Field>,
}

/// A single documented structure, with its properties and any methods
/// attached later by receiver-type match.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StructureRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub line: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `@property` entries, in appearance order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<FunctionRecord>,
}

/// Generator metadata attached to every emitted document.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generator: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
}

/// Complete accumulated extraction result for one run.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<FunctionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structures: Vec<StructureRecord>,
}
