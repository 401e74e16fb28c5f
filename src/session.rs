//! Builder Session
//!
//! Everything the app owns for one user: the form, the responses and the
//! theme. Created from storage at startup and reset by an explicit clear.

use reactive_stores::Store;

use crate::models::{FormModel, ResponseLog, ResponseRecord, Theme};

#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct Session {
    pub form: FormModel,
    pub responses: ResponseLog,
    pub theme: Theme,
}

impl Session {
    /// Capture a submission against the current fields and append it
    pub fn submit_response<F>(&mut self, timestamp: String, values: F) -> &ResponseRecord
    where
        F: Fn(&str) -> Vec<String>,
    {
        let record = ResponseRecord::capture(&self.form.fields, timestamp, values);
        self.responses.append(record);
        &self.responses.records()[self.responses.len() - 1]
    }

    /// Reset form and responses; the theme is a user preference and stays
    pub fn clear(&mut self) {
        self.form.clear();
        self.responses = ResponseLog::default();
    }
}
