//! Error handling for the connection string codec.
//!
//! Parsing itself never fails: a non-matching input yields an empty record and a
//! warning diagnostic. The error types here cover the strict parse variant,
//! formatting preconditions and configuration loading.
//!
//! # Example
//!
//! ```rust
//! use mongo_uri::error::{CodecError, Result, UriError};
//!
//! fn strict(uri: &str) -> Result<()> {
//!     mongo_uri::try_parse(uri)?;
//!     Ok(())
//! }
//!
//! assert!(matches!(
//!     strict("not a uri"),
//!     Err(CodecError::Uri(UriError::NoMatch(_)))
//! ));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{CodecError, ConfigError, Result, UriError};
