//! Toast Host
//!
//! Shows the current toast; the context dismisses it on a timer.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_app_context().toast;

    view! {
        {move || toast.get().map(|t| {
            let class = match t.kind {
                ToastKind::Success => "toast",
                ToastKind::Error => "toast error",
            };
            view! { <div class=class role="status">{t.message}</div> }
        })}
    }
}
