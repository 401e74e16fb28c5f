//! Field Editor Dialog
//!
//! Property dialog for one field. Inputs are local until Save; Cancel
//! leaves the form untouched.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::FieldPatch;
use crate::models::FieldDescriptor;
use crate::session::SessionStoreFields;
use crate::store::store_edit_field;

/// Shows the dialog while `editing` points at a field
#[component]
pub fn FieldEditor(
    editing: ReadSignal<Option<usize>>,
    set_editing: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || {
            let index = editing.get()?;
            let field = ctx.store.form().read_untracked().fields.get(index).cloned();
            if field.is_none() {
                log::warn!("[FORM] Edit requested for missing field {}", index);
            }
            field.map(|field| view! { <FieldEditorDialog index=index field=field set_editing=set_editing /> })
        }}
    }
}

#[component]
fn FieldEditorDialog(
    index: usize,
    field: FieldDescriptor,
    set_editing: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let info = field.field_type.info();
    let initial = FieldPatch::from_field(&field);

    let (label, set_label) = signal(initial.label);
    let (placeholder, set_placeholder) = signal(initial.placeholder);
    let (required, set_required) = signal(initial.required);
    let (validation, set_validation) = signal(initial.validation);
    let (options, set_options) = signal(initial.options);

    let close = move || set_editing.set(None);

    let save = move |_| {
        let patch = FieldPatch {
            label: label.get_untracked(),
            placeholder: placeholder.get_untracked(),
            required: required.get_untracked(),
            validation: validation.get_untracked(),
            options: options.get_untracked(),
        };
        if store_edit_field(&ctx.store, index, &patch) {
            ctx.notify("Field settings updated!");
        }
        close();
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h3>{format!("{} {} Settings", info.icon, info.label)}</h3>
                    <button class="close-btn" on:click=move |_| close()>"×"</button>
                </div>

                <div class="modal-body">
                    <div class="editor-section">
                        <label class="editor-label">"Label"</label>
                        <input
                            type="text"
                            prop:value=move || label.get()
                            on:input=move |ev| set_label.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="editor-section">
                        <label class="editor-label">"Placeholder"</label>
                        <input
                            type="text"
                            prop:value=move || placeholder.get()
                            on:input=move |ev| set_placeholder.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="editor-section checkbox-row">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || required.get()
                                on:change=move |ev| set_required.set(event_target_checked(&ev))
                            />
                            " Required field"
                        </label>
                    </div>

                    {info.has_options.then(|| view! {
                        <div class="editor-section">
                            <label class="editor-label">"Options (comma-separated)"</label>
                            <input
                                type="text"
                                placeholder="Option 1, Option 2, Option 3"
                                prop:value=move || options.get()
                                on:input=move |ev| set_options.set(event_target_value(&ev))
                            />
                        </div>
                    })}

                    {info.has_placeholder.then(|| view! {
                        <div class="editor-section">
                            <label class="editor-label">"Validation pattern (regex)"</label>
                            <input
                                type="text"
                                placeholder="e.g. [A-Za-z]+"
                                prop:value=move || validation.get()
                                on:input=move |ev| set_validation.set(event_target_value(&ev))
                            />
                        </div>
                    })}
                </div>

                <div class="modal-footer">
                    <button class="btn secondary" on:click=move |_| close()>"Cancel"</button>
                    <button class="btn primary" on:click=save>"Save"</button>
                </div>
            </div>
        </div>
    }
}
