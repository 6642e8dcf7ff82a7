// SPDX-License-Identifier: MPL-2.0
pub use crate::domain::error::InputError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Input(InputError),
    /// The request never produced an HTTP response (connection refused, DNS, TLS...).
    Transport(String),
    /// The service answered with a non-2xx status.
    Api {
        status: u16,
        detail: String,
    },
    /// A 2xx response whose body could not be understood.
    Response(String),
}

impl Error {
    /// Message shown to the user in the results panel.
    ///
    /// Server-provided details are shown verbatim; everything else falls back
    /// to the `Display` rendering.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { detail, .. } => detail.clone(),
            Error::Transport(msg) | Error::Response(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Input(e) => write!(f, "Input Error: {}", e),
            Error::Transport(e) => write!(f, "Transport Error: {}", e),
            Error::Api { status, detail } => write!(f, "HTTP {}: {}", status, detail),
            Error::Response(e) => write!(f, "Response Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Error::Input(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Response(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Response(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_error_user_message_is_the_server_detail() {
        let err = Error::Api {
            status: 400,
            detail: "bad image".into(),
        };
        assert_eq!(err.user_message(), "bad image");
        assert_eq!(format!("{}", err), "HTTP 400: bad image");
    }

    #[test]
    fn input_error_converts_into_error() {
        let err: Error = InputError::EmptyUrl.into();
        assert!(matches!(err, Error::Input(InputError::EmptyUrl)));
    }

    #[test]
    fn serde_json_error_is_a_response_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Response(_)));
    }
}
