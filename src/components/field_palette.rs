//! Field Palette Component
//!
//! One button per catalog entry; clicking appends a field of that type.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::FieldType;
use crate::store::store_add_field;

#[component]
pub fn FieldPalette() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside class="field-palette">
            <h3 class="palette-title">"Field Types"</h3>
            <div class="palette-list">
                {FieldType::ALL.iter().map(|&field_type| {
                    let info = field_type.info();
                    view! {
                        <button
                            class="field-btn"
                            data-type=field_type.as_str()
                            on:click=move |_| {
                                let label = store_add_field(&ctx.store, field_type);
                                ctx.notify(format!("{} added successfully!", label));
                            }
                        >
                            <span class="field-btn-icon">{info.icon}</span>
                            <span class="field-btn-label">{info.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </aside>
    }
}
