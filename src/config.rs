//! App Constants
//!
//! Storage layout, defaults and UI timings.

use log::LevelFilter;

/// Storage slot for the colour theme (raw string, not JSON)
pub const THEME_KEY: &str = "theme";
/// Storage slot for `{ title, submitText, fields }`
pub const FORM_KEY: &str = "formBuilder";
/// Storage slot for the response log
pub const RESPONSES_KEY: &str = "formResponses";

pub const DEFAULT_TITLE: &str = "Untitled Form";
pub const DEFAULT_SUBMIT_TEXT: &str = "Submit Form";

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

/// CSS selector of editor rows taking part in drag-to-reorder
pub const FIELD_ROW_SELECTOR: &str = ".field-item";

/// Human-readable submission timestamp, e.g. `3/14/2025, 9:05:12 AM`
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const LOG_CAPACITY: usize = 200;
