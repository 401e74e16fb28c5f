//! UI Components
//!
//! Leptos components for the builder, preview and dialogs.

mod confirm_button;
mod header;
mod field_palette;
mod form_settings;
mod field_card;
mod field_list;
mod field_editor;
mod preview_form;
mod responses_modal;
mod toast;

pub use confirm_button::ConfirmButton;
pub use header::Header;
pub use field_palette::FieldPalette;
pub use form_settings::FormSettings;
pub use field_card::FieldCard;
pub use field_list::FieldList;
pub use field_editor::FieldEditor;
pub use preview_form::PreviewForm;
pub use responses_modal::ResponsesModal;
pub use toast::ToastHost;
