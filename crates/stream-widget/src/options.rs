//! Widget configuration options.
//!
//! Option values are stored as raw strings (the settings UI writes
//! whatever the user typed); accessors apply parse-with-fallback so a
//! bad value degrades to the documented default instead of erroring.

use chrono::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CACHE_DURATION_HOURS: i64 = 6;
pub const DEFAULT_WIDGET_SIZE: &str = "large";
pub const DEFAULT_WIDGET_PREVIEW: &str = "image";

/// A value/label pair for settings-UI select boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// User-chosen widget options, as raw stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetOptions {
    pub cache_duration: String,
    pub widget_size: String,
    pub widget_preview: String,
}

impl WidgetOptions {
    /// Stream cache TTL in hours. Non-numeric, non-positive, or
    /// absurdly large values fall back to the default of 6; the upper
    /// bound is whatever still fits in a [`Duration`].
    pub fn cache_duration_hours(&self) -> i64 {
        match self.cache_duration.trim().parse::<i64>() {
            Ok(hours) if hours > 0 && Duration::try_hours(hours).is_some() => hours,
            _ => DEFAULT_CACHE_DURATION_HOURS,
        }
    }

    pub fn widget_size(&self) -> &str {
        if self.widget_size.is_empty() {
            DEFAULT_WIDGET_SIZE
        } else {
            &self.widget_size
        }
    }

    pub fn widget_preview(&self) -> &str {
        if self.widget_preview.is_empty() {
            DEFAULT_WIDGET_PREVIEW
        } else {
            &self.widget_preview
        }
    }
}

/// Widget size choices offered by the settings UI.
pub fn widget_size_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("", "Please select..."),
        SelectOption::new("large", "Large"),
        SelectOption::new("small", "Small"),
        SelectOption::new("large-first", "First Large, Others Small"),
    ]
}

/// Widget preview choices offered by the settings UI.
pub fn widget_preview_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("", "Please select..."),
        SelectOption::new("image", "Image"),
        SelectOption::new("video", "Video"),
        SelectOption::new("video-first", "First Video, Others Images"),
    ]
}

/// Stream languages selectable in the widget, as ISO 639-1 codes
/// (plus the regional variants Twitch distinguishes).
pub fn languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("da", "Danish"),
        ("de", "German"),
        ("en", "English"),
        ("en-gb", "English (UK)"),
        ("es", "Spanish"),
        ("es-mx", "Spanish (Latin American)"),
        ("fr", "French"),
        ("it", "Italian"),
        ("hu", "Hungarian"),
        ("nl", "Dutch"),
        ("no", "Norwegian"),
        ("pl", "Polish"),
        ("pt", "Portuguese"),
        ("pt-br", "Portuguese (Brazil)"),
        ("sk", "Slovenian"),
        ("fi", "Finnish"),
        ("sv", "Swedish"),
        ("vi", "Vietnamese"),
        ("tr", "Turkish"),
        ("cs", "Czech"),
        ("el", "Greek"),
        ("bg", "Bulgarian"),
        ("ru", "Russian"),
        ("ar", "Arabic"),
        ("th", "Thai"),
        ("zh-cn", "Chinese"),
        ("zh-tw", "Chinese (Traditional)"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("hi", "Hindi"),
        ("ro", "Romanian"),
    ]
}

/// Language choices sorted by label, behind a "please select" sentinel.
pub fn language_options() -> Vec<SelectOption> {
    let mut entries = languages();
    entries.sort_by(|a, b| a.1.cmp(b.1));

    let mut options = vec![SelectOption::new("", "Please select...")];
    options.extend(
        entries
            .into_iter()
            .map(|(code, label)| SelectOption::new(code, label)),
    );
    options
}
