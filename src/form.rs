//! Form Model Operations
//!
//! Add, edit, delete and move fields of the form being built.
//! Index-based operations reject stale indices with `FormError::OutOfRange`.

use leptos_dragdrop::InsertionPoint;
use thiserror::Error;

use crate::config::{DEFAULT_SUBMIT_TEXT, DEFAULT_TITLE};
use crate::models::{FieldDescriptor, FieldId, FieldType, FormModel};

/// Form model errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field index {index} out of range ({len} fields)")]
    OutOfRange { index: usize, len: usize },
}

pub type FormResult<T> = Result<T, FormError>;

/// Values from the property dialog.
///
/// Blank label/placeholder/validation keep the current value; `required`
/// always applies; `options` is a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: String,
    pub placeholder: String,
    pub required: bool,
    pub validation: String,
    pub options: String,
}

impl FieldPatch {
    /// Dialog contents for an existing field
    pub fn from_field(field: &FieldDescriptor) -> Self {
        Self {
            label: field.label.clone(),
            placeholder: field.placeholder.clone(),
            required: field.required,
            validation: field.validation.clone(),
            options: field.options.join(", "),
        }
    }
}

/// Split a comma-separated option list, trimming and dropping blanks
pub fn parse_options(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

fn keep_if_blank(current: &mut String, input: &str) {
    if !input.is_empty() {
        *current = input.to_string();
    }
}

impl FieldDescriptor {
    /// New field with catalog defaults
    pub fn new(id: FieldId, field_type: FieldType) -> Self {
        Self {
            id,
            field_type,
            label: field_type.info().label.to_string(),
            placeholder: field_type.default_placeholder(),
            required: false,
            options: field_type.default_options(),
            validation: String::new(),
        }
    }

    pub fn apply(&mut self, patch: &FieldPatch) {
        keep_if_blank(&mut self.label, &patch.label);
        keep_if_blank(&mut self.placeholder, &patch.placeholder);
        keep_if_blank(&mut self.validation, &patch.validation);
        self.required = patch.required;
        if self.field_type.info().has_options {
            self.options = parse_options(&patch.options);
        }
    }
}

impl FormModel {
    fn check_index(&self, index: usize) -> FormResult<()> {
        if index < self.fields.len() {
            Ok(())
        } else {
            Err(FormError::OutOfRange { index, len: self.fields.len() })
        }
    }

    /// Next id above every id seen so far, deleted fields included
    fn fresh_id(&mut self) -> FieldId {
        let highest = self.fields.iter().map(|f| f.id).max().unwrap_or_default();
        let id = self.last_id.max(highest).next();
        self.last_id = id;
        id
    }

    /// Append a field of `field_type`, returning it
    pub fn add_field(&mut self, field_type: FieldType) -> &FieldDescriptor {
        let id = self.fresh_id();
        let field = FieldDescriptor::new(id, field_type);
        self.fields.push(field);
        &self.fields[self.fields.len() - 1]
    }

    pub fn edit_field(&mut self, index: usize, patch: &FieldPatch) -> FormResult<()> {
        self.check_index(index)?;
        self.fields[index].apply(patch);
        Ok(())
    }

    /// Remove and return the field at `index`
    pub fn delete_field(&mut self, index: usize) -> FormResult<FieldDescriptor> {
        self.check_index(index)?;
        Ok(self.fields.remove(index))
    }

    /// Move the field at `from` so it ends up at `to`.
    /// Returns whether the order changed.
    pub fn reorder(&mut self, from: usize, to: usize) -> FormResult<bool> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(false);
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        Ok(true)
    }

    /// Commit a drag gesture that ended at `point`
    pub fn drop_field(&mut self, from: usize, point: InsertionPoint) -> FormResult<bool> {
        let to = point.target_index(from, self.fields.len());
        self.reorder(from, to)
    }

    pub fn clear(&mut self) {
        let last_id = self.last_id;
        *self = FormModel { last_id, ..FormModel::default() };
    }

    /// Replace blank title / submit label with the defaults
    pub fn normalize(&mut self) {
        if self.title.is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }
        if self.submit_text.is_empty() {
            self.submit_text = DEFAULT_SUBMIT_TEXT.to_string();
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { DEFAULT_TITLE } else { &self.title }
    }

    pub fn display_submit_text(&self) -> &str {
        if self.submit_text.is_empty() { DEFAULT_SUBMIT_TEXT } else { &self.submit_text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn form_with(types: &[FieldType]) -> FormModel {
        let mut form = FormModel::default();
        for ty in types {
            form.add_field(*ty);
        }
        form
    }

    fn ids(form: &FormModel) -> Vec<FieldId> {
        form.fields.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_add_field_defaults() {
        let mut form = FormModel::default();
        let field = form.add_field(FieldType::Email).clone();
        assert_eq!(field.label, "Email");
        assert_eq!(field.placeholder, "Enter email");
        assert!(!field.required);
        assert!(field.options.is_empty());
        assert!(field.validation.is_empty());

        let radio = form.add_field(FieldType::Radio).clone();
        assert_eq!(radio.placeholder, "");
        assert_eq!(radio.options, vec!["Option 1", "Option 2", "Option 3"]);
    }

    #[test]
    fn test_add_field_unique_ids() {
        let form = form_with(&FieldType::ALL);
        assert_eq!(form.fields.len(), FieldType::ALL.len());
        let unique: HashSet<_> = ids(&form).into_iter().collect();
        assert_eq!(unique.len(), form.fields.len());
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let mut form = form_with(&[FieldType::Text, FieldType::Text, FieldType::Text]);
        form.delete_field(0).unwrap();
        form.add_field(FieldType::Date);
        let unique: HashSet<_> = ids(&form).into_iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut form = form_with(&[FieldType::Text, FieldType::Radio]);
        let deleted = form.delete_field(1).unwrap().id;
        let fresh = form.add_field(FieldType::Radio).id;
        assert_ne!(fresh, deleted);
        assert!(fresh > deleted);

        form.clear();
        assert!(form.add_field(FieldType::Text).id > fresh);
    }

    #[test]
    fn test_ids_continue_above_loaded_fields() {
        let mut form = FormModel::default();
        form.fields.push(FieldDescriptor::new(FieldId(1712345678901), FieldType::Date));
        assert_eq!(form.add_field(FieldType::Text).id, FieldId(1712345678902));
    }

    #[test]
    fn test_edit_parses_options() {
        let mut form = form_with(&[FieldType::Checkbox]);
        let patch = FieldPatch { options: "A, B ,, C".to_string(), ..Default::default() };
        form.edit_field(0, &patch).unwrap();
        assert_eq!(form.fields[0].options, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_edit_ignores_options_for_plain_types() {
        let mut form = form_with(&[FieldType::Text]);
        let patch = FieldPatch { options: "A, B".to_string(), ..Default::default() };
        form.edit_field(0, &patch).unwrap();
        assert!(form.fields[0].options.is_empty());
    }

    #[test]
    fn test_edit_keeps_blank_values() {
        let mut form = form_with(&[FieldType::Text]);
        let patch = FieldPatch {
            label: "Name".to_string(),
            validation: "[A-Za-z]+".to_string(),
            required: true,
            ..Default::default()
        };
        form.edit_field(0, &patch).unwrap();

        form.edit_field(0, &FieldPatch::default()).unwrap();
        let field = &form.fields[0];
        assert_eq!(field.label, "Name");
        assert_eq!(field.placeholder, "Enter text input");
        assert_eq!(field.validation, "[A-Za-z]+");
        // required=false always overwrites
        assert!(!field.required);
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut form = form_with(&[FieldType::Text]);
        let before = form.clone();
        let err = form.edit_field(3, &FieldPatch::default()).unwrap_err();
        assert_eq!(err, FormError::OutOfRange { index: 3, len: 1 });
        assert_eq!(form, before);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut form = form_with(&[FieldType::Text, FieldType::Email, FieldType::Date, FieldType::File]);
        let before = ids(&form);
        let removed = form.delete_field(1).unwrap();
        assert_eq!(removed.field_type, FieldType::Email);
        assert_eq!(ids(&form), vec![before[0], before[2], before[3]]);
        assert!(form.delete_field(3).is_err());
    }

    #[test]
    fn test_reorder_is_a_move() {
        let mut form = form_with(&[FieldType::Text, FieldType::Email, FieldType::Date]);
        let before = ids(&form);
        assert!(form.reorder(0, 2).unwrap());
        assert_eq!(ids(&form), vec![before[1], before[2], before[0]]);
    }

    #[test]
    fn test_reorder_round_trip() {
        let len = 5;
        for i in 0..len {
            for j in 0..len {
                if i == j {
                    continue;
                }
                let mut form = form_with(&[FieldType::Text; 5]);
                let before = ids(&form);
                form.reorder(i, j).unwrap();
                form.reorder(j, i).unwrap();
                assert_eq!(ids(&form), before, "reorder({i}, {j})");
            }
        }
    }

    #[test]
    fn test_reorder_same_index_and_invalid() {
        let mut form = form_with(&[FieldType::Text, FieldType::Email]);
        assert!(!form.reorder(1, 1).unwrap());
        assert_eq!(form.reorder(0, 2), Err(FormError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(form.reorder(5, 0), Err(FormError::OutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn test_drop_field() {
        let mut form = form_with(&[FieldType::Text, FieldType::Email, FieldType::Date]);
        let before = ids(&form);

        // Drag row 0 below row 1
        assert!(form.drop_field(0, InsertionPoint::Before(2)).unwrap());
        assert_eq!(ids(&form), vec![before[1], before[0], before[2]]);

        // Drag the new row 0 to the end
        assert!(form.drop_field(0, InsertionPoint::End).unwrap());
        assert_eq!(ids(&form), vec![before[0], before[2], before[1]]);

        // Dropping right where it already sits is a no-op
        assert!(!form.drop_field(1, InsertionPoint::Before(2)).unwrap());
    }

    #[test]
    fn test_clear_and_normalize() {
        let mut form = form_with(&[FieldType::Text]);
        form.title = String::new();
        assert_eq!(form.display_title(), "Untitled Form");
        form.normalize();
        assert_eq!(form.title, "Untitled Form");

        form.submit_text = "Send".to_string();
        form.clear();
        assert!(form.fields.is_empty());
        assert_eq!(form.submit_text, "Submit Form");
    }
}
