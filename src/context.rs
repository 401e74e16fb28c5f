//! Application Context
//!
//! Store handle, toast state and the session-level actions that touch
//! storage, provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::persistence::Persistence;
use crate::session::SessionStoreFields;
use crate::store::AppStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient user notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

/// Whether the timer started for toast `id` may dismiss `current`
fn timer_owns(current: Option<&Toast>, id: u32) -> bool {
    current.is_some_and(|toast| toast.id == id)
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Toast currently on screen - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Toast currently on screen - write
    set_toast: WriteSignal<Option<Toast>>,
    toast_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        let (toast, set_toast) = signal(None::<Toast>);
        Self {
            store,
            toast,
            set_toast,
            toast_seq: StoredValue::new(0),
        }
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&self, message: String, kind: ToastKind) {
        self.toast_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let id = self.toast_seq.get_value();
        self.set_toast.set(Some(Toast { id, message, kind }));

        // Only the newest toast is dismissed by its own timer
        let toast = self.toast;
        let set_toast = self.set_toast;
        Timeout::new(TOAST_DURATION_MS, move || {
            if toast.with_untracked(|current| timer_owns(current.as_ref(), id)) {
                set_toast.set(None);
            }
        })
        .forget();
    }

    /// Persist form and responses
    pub fn save(&self) {
        let session = self.store.get_untracked();
        match Persistence::browser().and_then(|p| p.save(&session)) {
            Ok(()) => {
                log::info!("[STORAGE] Saved form with {} fields", session.form.fields.len());
                self.notify("Form saved successfully!");
            }
            Err(err) => {
                log::error!("[STORAGE] Save failed: {}", err);
                self.notify_error(format!("Could not save form: {}", err));
            }
        }
    }

    /// Drop form and responses from storage, then from memory
    pub fn clear(&self) {
        let cleared =
            Persistence::browser().and_then(|p| p.clear_session(&mut self.store.write()));
        match cleared {
            Ok(()) => {
                log::info!("[STORAGE] Cleared form and responses");
                self.notify("Form cleared successfully!");
            }
            Err(err) => {
                log::error!("[STORAGE] Clear failed: {}", err);
                self.notify_error(format!("Could not clear form: {}", err));
            }
        }
    }

    /// Record a preview submission and write the log through
    pub fn submit_response<F>(&self, timestamp: String, values: F)
    where
        F: Fn(&str) -> Vec<String>,
    {
        let count = {
            let mut session = self.store.write();
            session.submit_response(timestamp, values);
            session.responses.len()
        };
        log::info!("[PREVIEW] Recorded response #{}", count);

        let saved = Persistence::browser()
            .and_then(|p| p.save_responses(&self.store.responses().read_untracked()));
        match saved {
            Ok(()) => self.notify("Form submitted successfully!"),
            Err(err) => {
                log::error!("[STORAGE] Saving responses failed: {}", err);
                self.notify_error(format!("Response recorded but not saved: {}", err));
            }
        }
    }

    pub fn toggle_theme(&self) {
        let theme = self.store.theme().get_untracked().toggled();
        *self.store.theme().write() = theme;
        if let Err(err) = Persistence::browser().and_then(|p| p.save_theme(theme)) {
            log::warn!("[STORAGE] Theme not saved: {}", err);
        }
        self.notify(format!("Switched to {} mode!", theme.as_str()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast { id, message: format!("toast {}", id), kind: ToastKind::Success }
    }

    #[test]
    fn test_timer_dismisses_its_own_toast() {
        assert!(timer_owns(Some(&toast(4)), 4));
    }

    #[test]
    fn test_older_timer_leaves_newer_toast() {
        // Error toast 1 replaced by success toast 2 before timer 1 fires
        let shown = toast(2);
        assert!(!timer_owns(Some(&shown), 1));
        assert!(timer_owns(Some(&shown), 2));
    }

    #[test]
    fn test_timer_after_dismissal() {
        assert!(!timer_owns(None, 3));
    }
}
