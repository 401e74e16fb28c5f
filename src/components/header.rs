//! Header Component
//!
//! App title with theme toggle, responses, save and clear actions.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::use_app_context;
use crate::session::SessionStoreFields;

/// Top bar with form-level actions
#[component]
pub fn Header(set_show_responses: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let theme = move || ctx.store.theme().get();

    view! {
        <header class="app-header">
            <div class="app-brand">
                <span class="app-logo">"🧩"</span>
                <span class="app-title">"Form Builder"</span>
            </div>

            <div class="header-actions">
                <button
                    class="header-btn theme-toggle"
                    title=move || format!("Switch to {} mode", theme().toggled().as_str())
                    on:click=move |_| ctx.toggle_theme()
                >
                    <span class="theme-icon">{move || theme().icon()}</span>
                </button>
                <button class="header-btn" on:click=move |_| set_show_responses.set(true)>
                    "📊 Responses"
                </button>
                <button class="header-btn primary" on:click=move |_| ctx.save()>
                    "💾 Save"
                </button>
                <ConfirmButton
                    button_class="header-btn danger"
                    label="🗑️ Clear"
                    prompt="Clear the entire form?"
                    on_confirm=move |_: ()| ctx.clear()
                />
            </div>
        </header>
    }
}
