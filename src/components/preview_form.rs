//! Preview Form Component
//!
//! Live, submittable rendering of the form. Controls are named by position
//! (`field-<index>`); a submission is captured into the response log and the
//! on-screen form is reset.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::TIMESTAMP_FORMAT;
use crate::context::use_app_context;
use crate::models::{FieldDescriptor, FieldType};
use crate::responses::field_name;
use crate::session::SessionStoreFields;

/// Every value submitted under `name`; file inputs yield the file name
fn submitted_values(data: &web_sys::FormData, name: &str) -> Vec<String> {
    data.get_all(name)
        .iter()
        .filter_map(|value| {
            value
                .as_string()
                .or_else(|| value.dyn_ref::<web_sys::File>().map(|file| file.name()))
        })
        .collect()
}

#[component]
pub fn PreviewForm() -> impl IntoView {
    let ctx = use_app_context();

    // Snapshot taken when the preview opens
    let form = ctx.store.form().get_untracked();
    let title = form.display_title().to_string();
    let submit_text = form.display_submit_text().to_string();

    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form_el) = form_ref.get() else {
            return;
        };
        let data = match web_sys::FormData::new_with_form(&form_el) {
            Ok(data) => data,
            Err(err) => {
                log::error!("[PREVIEW] Could not read form data: {:?}", err);
                ctx.notify_error("Could not read the submitted form");
                return;
            }
        };

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        ctx.submit_response(timestamp, |name| submitted_values(&data, name));
        form_el.reset();
    };

    view! {
        <form class="preview-form" node_ref=form_ref on:submit=on_submit>
            <h2 class="preview-title">{title}</h2>
            {form.fields
                .into_iter()
                .enumerate()
                .map(|(index, field)| view! { <PreviewField index=index field=field /> })
                .collect_view()}
            <button type="submit" class="preview-submit">{submit_text}</button>
        </form>
    }
}

#[component]
fn PreviewField(index: usize, field: FieldDescriptor) -> impl IntoView {
    let name = field_name(index);
    let required = field.required;

    let control = match field.field_type {
        FieldType::Textarea => view! {
            <textarea name=name placeholder=field.placeholder.clone() required=required></textarea>
        }.into_any(),
        FieldType::Dropdown => view! {
            <select name=name required=required>
                <option value="">"Select an option"</option>
                {field.options.iter().map(|opt| view! {
                    <option value=opt.clone()>{opt.clone()}</option>
                }).collect_view()}
            </select>
        }.into_any(),
        FieldType::Radio => view! {
            <div class="radio-group">
                {field.options.iter().enumerate().map(|(i, opt)| {
                    // Native required on the first radio covers the whole group
                    let first_required = required && i == 0;
                    view! {
                        <label class="radio-option">
                            <input type="radio" name=name.clone() value=opt.clone() required=first_required />
                            <span>{opt.clone()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        }.into_any(),
        FieldType::Checkbox => view! {
            <div class="checkbox-group">
                {field.options.iter().map(|opt| view! {
                    <label class="checkbox-option">
                        <input type="checkbox" name=name.clone() value=opt.clone() />
                        <span>{opt.clone()}</span>
                    </label>
                }).collect_view()}
            </div>
        }.into_any(),
        other => {
            let pattern = (other.accepts_pattern() && !field.validation.is_empty())
                .then(|| field.validation.clone());
            view! {
                <input
                    type=other.input_type()
                    name=name
                    placeholder=field.placeholder.clone()
                    required=required
                    pattern=pattern
                />
            }.into_any()
        }
    };

    view! {
        <div class="preview-field">
            <label class="preview-label">
                {field.label.clone()}
                {required.then(|| view! { <span class="required-mark">" *"</span> })}
            </label>
            {control}
        </div>
    }
}
