// SPDX-License-Identifier: MPL-2.0
//! Input rejections raised before any request leaves the client.

use std::fmt;

/// Rejections raised before any request is sent.
/// Used to provide user-friendly, localized warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The selected file does not carry an `image/*` MIME type.
    NotAnImage { mime: String },

    /// The URL field is empty after trimming.
    EmptyUrl,

    /// Analyze was requested before any file or URL was loaded.
    NoSource,

    /// A request is already in flight.
    Busy,

    /// Files can only be dropped on the file tab.
    WrongTab,
}

impl InputError {
    /// Returns the i18n message key for this rejection.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            InputError::NotAnImage { .. } => "notification-not-an-image",
            InputError::EmptyUrl => "notification-empty-url",
            InputError::NoSource => "notification-no-source",
            InputError::Busy => "notification-busy",
            InputError::WrongTab => "notification-wrong-tab",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnImage { mime } => write!(f, "Not an image file ({})", mime),
            InputError::EmptyUrl => write!(f, "Please enter a valid URL"),
            InputError::NoSource => write!(f, "Please upload an image or enter a URL first"),
            InputError::Busy => write!(f, "A request is already in progress"),
            InputError::WrongTab => write!(f, "Switch to the file tab to drop images"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_i18n_keys() {
        assert_eq!(
            InputError::NotAnImage {
                mime: "text/plain".into()
            }
            .i18n_key(),
            "notification-not-an-image"
        );
        assert_eq!(InputError::EmptyUrl.i18n_key(), "notification-empty-url");
        assert_eq!(InputError::NoSource.i18n_key(), "notification-no-source");
        assert_eq!(InputError::Busy.i18n_key(), "notification-busy");
        assert_eq!(InputError::WrongTab.i18n_key(), "notification-wrong-tab");
    }

    #[test]
    fn not_an_image_display_mentions_the_mime_type() {
        let err = InputError::NotAnImage {
            mime: "application/pdf".into(),
        };
        assert!(err.to_string().contains("application/pdf"));
    }
}
