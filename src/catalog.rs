//! Field Catalog
//!
//! Static metadata for each supported field type.

use crate::models::FieldType;

/// Display and capability flags of a field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeInfo {
    pub icon: &'static str,
    pub label: &'static str,
    pub has_placeholder: bool,
    pub has_options: bool,
}

const fn info(icon: &'static str, label: &'static str, has_placeholder: bool, has_options: bool) -> FieldTypeInfo {
    FieldTypeInfo { icon, label, has_placeholder, has_options }
}

static TEXT: FieldTypeInfo = info("📝", "Text Input", true, false);
static TEXTAREA: FieldTypeInfo = info("📄", "Textarea", true, false);
static EMAIL: FieldTypeInfo = info("📧", "Email", true, false);
static NUMBER: FieldTypeInfo = info("🔢", "Number", true, false);
static PASSWORD: FieldTypeInfo = info("🔒", "Password", true, false);
static DROPDOWN: FieldTypeInfo = info("📋", "Dropdown", false, true);
static RADIO: FieldTypeInfo = info("⭕", "Radio Buttons", false, true);
static CHECKBOX: FieldTypeInfo = info("☑️", "Checkboxes", false, true);
static DATE: FieldTypeInfo = info("📅", "Date Picker", false, false);
static FILE: FieldTypeInfo = info("📎", "File Upload", false, false);

impl FieldType {
    pub fn info(&self) -> &'static FieldTypeInfo {
        match self {
            FieldType::Text => &TEXT,
            FieldType::Textarea => &TEXTAREA,
            FieldType::Email => &EMAIL,
            FieldType::Number => &NUMBER,
            FieldType::Password => &PASSWORD,
            FieldType::Dropdown => &DROPDOWN,
            FieldType::Radio => &RADIO,
            FieldType::Checkbox => &CHECKBOX,
            FieldType::Date => &DATE,
            FieldType::File => &FILE,
        }
    }

    /// Default placeholder for new fields, empty when unsupported
    pub fn default_placeholder(&self) -> String {
        let info = self.info();
        if info.has_placeholder {
            format!("Enter {}", info.label.to_lowercase())
        } else {
            String::new()
        }
    }

    /// Default option list for new fields, empty when unsupported
    pub fn default_options(&self) -> Vec<String> {
        if self.info().has_options {
            (1..=3).map(|n| format!("Option {}", n)).collect()
        } else {
            Vec::new()
        }
    }

    /// Single-value text-like input that takes a `pattern` constraint
    pub fn accepts_pattern(&self) -> bool {
        self.info().has_placeholder && *self != FieldType::Textarea
    }

    /// `type` attribute for types rendered as a plain `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Password => "password",
            FieldType::Date => "date",
            FieldType::File => "file",
            _ => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_exclusive() {
        for ty in FieldType::ALL {
            let info = ty.info();
            assert!(!(info.has_placeholder && info.has_options), "{:?}", ty);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FieldType::Text.default_placeholder(), "Enter text input");
        assert_eq!(FieldType::Date.default_placeholder(), "");
        assert_eq!(FieldType::Radio.default_options(), vec!["Option 1", "Option 2", "Option 3"]);
        assert!(FieldType::Email.default_options().is_empty());
    }

    #[test]
    fn test_pattern_capable_types() {
        let capable: Vec<_> = FieldType::ALL.iter().filter(|t| t.accepts_pattern()).collect();
        assert_eq!(
            capable,
            vec![&FieldType::Text, &FieldType::Email, &FieldType::Number, &FieldType::Password]
        );
    }
}
