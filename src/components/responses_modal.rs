//! Responses Modal
//!
//! Table of recorded submissions, one column per current field label.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::responses::ResponseTable;
use crate::session::SessionStoreFields;

#[component]
pub fn ResponsesModal(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_context().store;

    let table = move || {
        let form = store.form().read();
        let responses = store.responses().read();
        ResponseTable::build(&form.fields, &responses)
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-overlay" on:click=move |_| set_show.set(false)>
                <div class="modal responses-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>"📊 Form Responses"</h3>
                        <button class="close-btn" on:click=move |_| set_show.set(false)>"×"</button>
                    </div>
                    <div class="modal-body">
                        {move || {
                            let table = table();
                            if table.rows.is_empty() {
                                view! {
                                    <p class="empty-responses">
                                        "No responses yet. Submit the form in preview mode to see responses here."
                                    </p>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="table-wrap">
                                        <table class="responses-table">
                                            <thead>
                                                <tr>
                                                    {table.headers.into_iter()
                                                        .map(|h| view! { <th>{h}</th> })
                                                        .collect_view()}
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {table.rows.into_iter().map(|row| view! {
                                                    <tr>
                                                        {row.into_iter()
                                                            .map(|cell| view! { <td>{cell}</td> })
                                                            .collect_view()}
                                                    </tr>
                                                }).collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
