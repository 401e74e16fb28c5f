//! Frontend Models
//!
//! Data structures shared by the builder, the preview and storage.
//! Field names follow the JSON layout kept in local storage.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{DEFAULT_SUBMIT_TEXT, DEFAULT_TITLE};

/// Supported input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Number,
    Password,
    Dropdown,
    Radio,
    Checkbox,
    Date,
    File,
}

impl FieldType {
    /// Palette order
    pub const ALL: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Email,
        FieldType::Number,
        FieldType::Password,
        FieldType::Dropdown,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::File,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Password => "password",
            FieldType::Dropdown => "dropdown",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::File => "file",
        }
    }
}

/// Opaque field identifier, unique within a form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl FieldId {
    pub fn next(self) -> Self {
        FieldId(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One configured input of the form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    /// Regex pattern, empty for none
    #[serde(default)]
    pub validation: String,
}

/// The form being built
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModel {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub submit_text: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Highest id handed out since load; never goes down
    #[serde(skip)]
    pub(crate) last_id: FieldId,
}

// Equality covers the stored content, not the id counter
impl PartialEq for FormModel {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.submit_text == other.submit_text
            && self.fields == other.fields
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            submit_text: DEFAULT_SUBMIT_TEXT.to_string(),
            fields: Vec::new(),
            last_id: FieldId::default(),
        }
    }
}

/// One submitted answer set, keyed by field label at submission time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient_answers")]
    pub data: BTreeMap<String, String>,
}

/// Append-only list of submissions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseLog {
    records: Vec<ResponseRecord>,
}

impl ResponseLog {
    pub fn append(&mut self, record: ResponseRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ResponseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

/// Unknown values read as the default theme
impl std::str::FromStr for Theme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        })
    }
}

/// Older records may hold non-string answers (e.g. a serialized file object)
fn lenient_answers<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(label, value)| {
            let answer = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null | serde_json::Value::Object(_) => String::new(),
                other => other.to_string(),
            };
            (label, answer)
        })
        .collect())
}
