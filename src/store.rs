//! Global Application State Store
//!
//! Wraps the `Session` in a reactive_stores `Store` for field-level
//! reactivity. Mutations go through the helpers below, which turn stale
//! indices into logged no-ops.

use leptos::prelude::*;
use leptos_dragdrop::InsertionPoint;
use reactive_stores::Store;

use crate::form::{FieldPatch, FormResult};
use crate::models::FieldType;
use crate::session::{Session, SessionStoreFields};

/// Type alias for the store
pub type AppStore = Store<Session>;

fn report<T>(op: &str, result: FormResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("[FORM] {} ignored: {}", op, err);
            None
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Append a field, returning its catalog label
pub fn store_add_field(store: &AppStore, field_type: FieldType) -> &'static str {
    let id = store.form().write().add_field(field_type).id;
    log::debug!("[FORM] Added {} field #{}", field_type.as_str(), id);
    field_type.info().label
}

pub fn store_edit_field(store: &AppStore, index: usize, patch: &FieldPatch) -> bool {
    report("edit", store.form().write().edit_field(index, patch)).is_some()
}

pub fn store_delete_field(store: &AppStore, index: usize) -> bool {
    report("delete", store.form().write().delete_field(index)).is_some()
}

/// Commit a drag gesture; true only when the order changed
pub fn store_drop_field(store: &AppStore, from: usize, point: InsertionPoint) -> bool {
    log::debug!("[DND] Drop: from={}, point={:?}", from, point);
    report("reorder", store.form().write().drop_field(from, point)).unwrap_or(false)
}

pub fn store_set_title(store: &AppStore, title: String) {
    store.form().write().title = title;
}

pub fn store_set_submit_text(store: &AppStore, submit_text: String) {
    store.form().write().submit_text = submit_text;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(types: &[FieldType]) -> AppStore {
        let store = Store::new(Session::default());
        for ty in types {
            store_add_field(&store, *ty);
        }
        store
    }

    #[test]
    fn test_helpers_update_form() {
        let store = store_with(&[FieldType::Text, FieldType::Email]);
        assert_eq!(store_add_field(&store, FieldType::Date), "Date Picker");
        assert_eq!(store.form().read_untracked().fields.len(), 3);

        assert!(store_drop_field(&store, 0, InsertionPoint::End));
        assert_eq!(store.form().read_untracked().fields[2].field_type, FieldType::Text);

        assert!(store_delete_field(&store, 2));
        let patch = FieldPatch { label: "Contact".to_string(), ..Default::default() };
        assert!(store_edit_field(&store, 0, &patch));
        assert_eq!(store.form().read_untracked().fields[0].label, "Contact");
    }

    #[test]
    fn test_stale_indices_are_ignored() {
        let store = store_with(&[FieldType::Text, FieldType::Email]);
        let before = store.get_untracked();

        assert!(!store_delete_field(&store, 2));
        assert!(!store_drop_field(&store, 5, InsertionPoint::Before(0)));
        assert!(!store_edit_field(&store, 9, &FieldPatch::default()));
        assert_eq!(store.get_untracked(), before);
    }

    #[test]
    fn test_drop_in_place_reports_no_change() {
        let store = store_with(&[FieldType::Text, FieldType::Email]);
        assert!(!store_drop_field(&store, 1, InsertionPoint::End));
        assert_eq!(store.form().read_untracked().fields[1].field_type, FieldType::Email);
    }
}
