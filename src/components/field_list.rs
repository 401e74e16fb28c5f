//! Field List Component
//!
//! Editor view of the form's fields with drag-to-reorder.
//! While dragging, an indicator marks the insertion point; the model is
//! only reordered on drop.

use leptos::prelude::*;

use crate::components::FieldCard;
use crate::config::FIELD_ROW_SELECTOR;
use crate::context::use_app_context;
use crate::session::SessionStoreFields;
use crate::store::store_drop_field;

use leptos_dragdrop::*;

#[component]
pub fn FieldList(set_editing: WriteSignal<Option<usize>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, FIELD_ROW_SELECTOR, move |from, point| {
        if store_drop_field(&store, from, point) {
            ctx.notify("Field reordered successfully!");
        }
    });

    let rows = move || {
        store.form().read().fields.iter().cloned().enumerate().collect::<Vec<_>>()
    };
    let is_empty = move || store.form().read().fields.is_empty();
    let drop_at_end = move || {
        dnd.dragging_read.get().is_some() && dnd.insertion_read.get() == Some(InsertionPoint::End)
    };

    view! {
        <div class="form-fields">
            <Show when=is_empty>
                <div class="empty-state">
                    <div class="empty-state-icon">"📝"</div>
                    <p>"No fields yet. Pick a field type on the left to start building your form."</p>
                </div>
            </Show>

            <For
                each=rows
                // Index and content both key the row so edits and moves re-render it
                key=|(index, field)| (*index, field.clone())
                children=move |(index, field)| {
                    let on_mousedown = make_on_mousedown(dnd, index);

                    // Visual state
                    let is_dragging = move || dnd.dragging_read.get() == Some(index);
                    let insert_before = move || {
                        dnd.dragging_read.get().is_some()
                            && dnd.insertion_read.get() == Some(InsertionPoint::Before(index))
                    };

                    let item_class = move || {
                        let mut c = String::from("field-item");
                        if is_dragging() { c.push_str(" dragging"); }
                        c
                    };

                    view! {
                        <Show when=insert_before>
                            <div class="drop-indicator" />
                        </Show>
                        <div
                            class=item_class
                            data-index=index.to_string()
                            on:mousedown=on_mousedown
                        >
                            <FieldCard index=index field=field set_editing=set_editing />
                        </div>
                    }
                }
            />

            <Show when=drop_at_end>
                <div class="drop-indicator" />
            </Show>
        </div>
    }
}
