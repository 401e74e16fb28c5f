//! Field Card Component
//!
//! One field in the editor: icon, label, required marker, edit/delete
//! actions and a disabled preview of the control.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::models::{FieldDescriptor, FieldType};
use crate::store::store_delete_field;

/// Editor card for the field at `index`
#[component]
pub fn FieldCard(
    index: usize,
    field: FieldDescriptor,
    set_editing: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let info = field.field_type.info();
    let label = field.label.clone();
    let required = field.required;

    let delete = move |_: ()| {
        if store_delete_field(&ctx.store, index) {
            ctx.notify("Field deleted successfully!");
        }
    };

    view! {
        <div class="field-header">
            <div class="field-label">
                <span class="field-icon">{info.icon}</span>
                <span class="field-label-text">{label}</span>
                {required.then(|| view! { <span class="required-badge">"*"</span> })}
            </div>
            <div class="field-actions">
                <button class="icon-btn edit" title="Edit field" on:click=move |_| set_editing.set(Some(index))>
                    "✏️"
                </button>
                <ConfirmButton
                    button_class="icon-btn delete"
                    label="🗑️"
                    prompt="Delete this field?"
                    on_confirm=delete
                />
            </div>
        </div>
        <div class="field-preview">
            <FieldPreview field=field />
        </div>
    }
}

/// Disabled rendering of the control a field will produce
#[component]
fn FieldPreview(field: FieldDescriptor) -> impl IntoView {
    let id = field.id;

    match field.field_type {
        FieldType::Textarea => view! {
            <textarea placeholder=field.placeholder disabled=true></textarea>
        }.into_any(),
        FieldType::Dropdown => view! {
            <select disabled=true>
                <option>"Select an option"</option>
                {field.options.into_iter().map(|opt| view! { <option>{opt}</option> }).collect_view()}
            </select>
        }.into_any(),
        FieldType::Radio => view! {
            <div class="radio-group">
                {field.options.into_iter().map(|opt| view! {
                    <label class="radio-option">
                        <input type="radio" name=format!("radio-{}", id) disabled=true />
                        <span>{opt}</span>
                    </label>
                }).collect_view()}
            </div>
        }.into_any(),
        FieldType::Checkbox => view! {
            <div class="checkbox-group">
                {field.options.into_iter().map(|opt| view! {
                    <label class="checkbox-option">
                        <input type="checkbox" disabled=true />
                        <span>{opt}</span>
                    </label>
                }).collect_view()}
            </div>
        }.into_any(),
        other => view! {
            <input type=other.input_type() placeholder=field.placeholder disabled=true />
        }.into_any(),
    }
}
