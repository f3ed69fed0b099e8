use std::{fmt, io};

/// Crate-wide `Result` type using [`CodecError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Top-level error type for the codec.
///
/// Wraps the more specific error kinds so callers can use a single error
/// type across parsing, formatting and configuration.
#[derive(Debug)]
pub enum CodecError {
    /// Connection string errors.
    Uri(UriError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Serialization errors (TOML, JSON, BSON).
    Serialization(String),
}

/// Errors raised while parsing or formatting a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The input does not match the connection string grammar.
    NoMatch(String),

    /// A field required to format a connection string is absent.
    MissingField(&'static str),

    /// A password is set without a username.
    PasswordWithoutUsername,
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Uri(e) => write!(f, "{e}"),
            CodecError::Config(e) => write!(f, "Configuration error: {e}"),
            CodecError::Io(e) => write!(f, "I/O error: {e}"),
            CodecError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriError::NoMatch(uri) => {
                write!(f, "This uri does not match a mongodb uri: \"{uri}\"")
            }
            UriError::MissingField(field) => {
                write!(f, "Cannot format connection string: missing {field}")
            }
            UriError::PasswordWithoutUsername => {
                write!(f, "Cannot format connection string: password set without username")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Uri(e) => Some(e),
            CodecError::Config(e) => Some(e),
            CodecError::Io(e) => Some(e),
            CodecError::Serialization(_) => None,
        }
    }
}
impl std::error::Error for UriError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to CodecError ========================= */

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        CodecError::Io(err)
    }
}

impl From<UriError> for CodecError {
    fn from(err: UriError) -> Self {
        CodecError::Uri(err)
    }
}

impl From<ConfigError> for CodecError {
    fn from(err: ConfigError) -> Self {
        CodecError::Config(err)
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for CodecError {
    fn from(err: toml::ser::Error) -> Self {
        CodecError::Serialization(format!("TOML: {err}"))
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Serialization(format!("JSON: {err}"))
    }
}

impl From<bson::ser::Error> for CodecError {
    fn from(err: bson::ser::Error) -> Self {
        CodecError::Serialization(format!("BSON: {err}"))
    }
}
