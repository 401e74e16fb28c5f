//! Form Settings Component
//!
//! Title and submit-button text inputs above the field list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session::SessionStoreFields;
use crate::store::{store_set_submit_text, store_set_title};

#[component]
pub fn FormSettings() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="form-settings">
            <input
                type="text"
                class="form-title-input"
                placeholder="Form title"
                prop:value=move || store.form().read().title.clone()
                on:input=move |ev| store_set_title(&store, event_target_value(&ev))
            />
            <label class="submit-text-row">
                <span class="editor-label">"Submit button"</span>
                <input
                    type="text"
                    class="submit-text-input"
                    placeholder="Submit Form"
                    prop:value=move || store.form().read().submit_text.clone()
                    on:input=move |ev| store_set_submit_text(&store, event_target_value(&ev))
                />
            </label>
        </div>
    }
}
