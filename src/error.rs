// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The request never produced a response (connect, timeout, TLS...).
    #[error("Network Error: {0}")]
    Network(String),

    /// The backend answered with a non-success status code.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body was not the JSON shape the caller asked for.
    #[error("Decode Error: {0}")]
    Decode(String),
}

impl Error {
    /// Returns `true` for failures where the backend could not be reached.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
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
            return Error::Decode(err.to_string());
        }
        Error::Network(err.to_string())
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
    fn status_error_displays_code_and_reason() {
        let err = Error::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn only_network_errors_are_classified_as_network() {
        assert!(Error::Network("connection refused".into()).is_network());
        assert!(!Error::Decode("expected value".into()).is_network());
        assert!(!Error::Status {
            status: 500,
            reason: "Internal Server Error".into()
        }
        .is_network());
    }

    #[test]
    fn invalid_toml_maps_to_config_error() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
