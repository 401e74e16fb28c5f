//! Persistence Bridge
//!
//! Reads and writes the session through a `KeyValueStore`.
//! The form and the response log live in separate slots and are written
//! independently; bad slot contents fall back to defaults on load.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{FORM_KEY, RESPONSES_KEY, THEME_KEY};
use crate::models::{FormModel, ResponseLog, Theme};
use crate::session::Session;
use crate::storage::{KeyValueStore, LocalStorage, StorageError, StorageResult};

pub struct Persistence<S> {
    store: S,
}

impl Persistence<LocalStorage> {
    /// Bridge over `window.localStorage`
    pub fn browser() -> StorageResult<Self> {
        LocalStorage::open().map(Self::new)
    }
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read<T: DeserializeOwned>(&self, key: &'static str) -> StorageResult<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Deserialize { key, source }),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &'static str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize { key, source })?;
        self.store.set(key, &raw)
    }

    pub fn save_form(&self, form: &FormModel) -> StorageResult<()> {
        self.write(FORM_KEY, form)
    }

    pub fn save_responses(&self, responses: &ResponseLog) -> StorageResult<()> {
        self.write(RESPONSES_KEY, responses)
    }

    /// Write both slots; a failure in one does not skip the other
    pub fn save(&self, session: &Session) -> StorageResult<()> {
        let form = self.save_form(&session.form);
        let responses = self.save_responses(&session.responses);
        form.and(responses)
    }

    pub fn load_form(&self) -> StorageResult<Option<FormModel>> {
        self.read(FORM_KEY)
    }

    pub fn load_responses(&self) -> StorageResult<Option<ResponseLog>> {
        self.read(RESPONSES_KEY)
    }

    /// Rebuild a session from storage, falling back to defaults per slot
    pub fn load(&self) -> Session {
        let mut session = Session::default();

        match self.load_form() {
            Ok(Some(mut form)) => {
                form.normalize();
                log::info!("[STORAGE] Loaded form with {} fields", form.fields.len());
                session.form = form;
            }
            Ok(None) => {}
            Err(err) => log::warn!("[STORAGE] {}; starting with an empty form", err),
        }

        match self.load_responses() {
            Ok(Some(responses)) => {
                log::info!("[STORAGE] Loaded {} responses", responses.len());
                session.responses = responses;
            }
            Ok(None) => {}
            Err(err) => log::warn!("[STORAGE] {}; starting with no responses", err),
        }

        session.theme = self.load_theme();
        session
    }

    /// Delete the form and response slots (the theme is kept)
    pub fn clear(&self) -> StorageResult<()> {
        let form = self.store.remove(FORM_KEY);
        let responses = self.store.remove(RESPONSES_KEY);
        form.and(responses)
    }

    /// Clear storage, then `session`. On a storage error the session is untouched.
    pub fn clear_session(&self, session: &mut Session) -> StorageResult<()> {
        self.clear()?;
        session.clear();
        Ok(())
    }

    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("[STORAGE] {}; using default theme", err);
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> StorageResult<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
