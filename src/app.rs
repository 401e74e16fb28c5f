//! Form Builder App
//!
//! Main application component: palette on the left, editor or preview in
//! the centre, dialogs and toasts on top.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    FieldEditor, FieldList, FieldPalette, FormSettings, Header, PreviewForm, ResponsesModal,
    ToastHost,
};
use crate::context::AppContext;
use crate::persistence::Persistence;
use crate::session::{Session, SessionStoreFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Edit,
    Preview,
}

fn load_session() -> Session {
    match Persistence::browser() {
        Ok(persistence) => persistence.load(),
        Err(err) => {
            log::warn!("[STORAGE] Storage unavailable, starting empty: {}", err);
            Session::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = load_session();
    log::info!(
        "[APP] Loaded form with {} fields and {} responses",
        session.form.fields.len(),
        session.responses.len()
    );

    let store = Store::new(session);
    let ctx = AppContext::new(store);
    provide_context(ctx);

    // State
    let (mode, set_mode) = signal(Mode::Edit);
    let (editing, set_editing) = signal::<Option<usize>>(None);
    let (show_responses, set_show_responses) = signal(false);

    // Theme goes onto <body> so the stylesheet can switch palettes
    Effect::new(move |_| {
        let theme = store.theme().get();
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            if let Err(err) = body.set_attribute("data-theme", theme.as_str()) {
                log::warn!("[APP] Could not apply theme: {:?}", err);
            }
        }
    });

    let tab_class = move |tab: Mode| {
        if mode.get() == tab { "mode-tab active" } else { "mode-tab" }
    };

    view! {
        <div class="app-layout">
            <Header set_show_responses=set_show_responses />

            <div class="builder">
                <FieldPalette />

                <main class="main-content">
                    <div class="mode-tabs">
                        <button class=move || tab_class(Mode::Edit) on:click=move |_| set_mode.set(Mode::Edit)>
                            "✏️ Edit"
                        </button>
                        <button class=move || tab_class(Mode::Preview) on:click=move |_| set_mode.set(Mode::Preview)>
                            "👁️ Preview"
                        </button>
                    </div>

                    // Editor stays mounted so its drag listeners are bound once
                    <div class=move || if mode.get() == Mode::Edit { "edit-mode" } else { "edit-mode hidden" }>
                        <FormSettings />
                        <FieldList set_editing=set_editing />
                    </div>

                    <Show when=move || mode.get() == Mode::Preview>
                        <PreviewForm />
                    </Show>
                </main>
            </div>

            <FieldEditor editing=editing set_editing=set_editing />
            <ResponsesModal show=show_responses set_show=set_show_responses />
            <ToastHost />
        </div>
    }
}
