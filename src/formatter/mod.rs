//! Connection string formatting
//!
//! Turns a [`ConnectionUri`] back into its textual form by concatenating
//! independently rendered segments:
//!
//! ```text
//! scheme:// + credentials + hosts + / + database + options
//! ```
//!
//! A host without a port is written without `:port`, and an option without a
//! value is written as a bare key, so formatting mirrors what the parser accepts.

use crate::error::{Result, UriError};
use crate::uri::{ConnectionUri, HostAddress, UriOptions};

/// Format a record into a connection string.
///
/// # Errors
/// * `UriError::MissingField` - `scheme` or `database` is absent
/// * `UriError::PasswordWithoutUsername` - credentials cannot be represented
pub fn format(uri: &ConnectionUri) -> Result<String> {
    let scheme = uri.scheme.as_deref().ok_or(UriError::MissingField("scheme"))?;
    let database = uri
        .database
        .as_deref()
        .ok_or(UriError::MissingField("database"))?;

    Ok(format!(
        "{scheme}://{}{}/{database}{}",
        format_credentials(uri.username.as_deref(), uri.password.as_deref())?,
        uri.hosts.as_deref().map(format_hosts).unwrap_or_default(),
        uri.options.as_ref().map(format_options).unwrap_or_default(),
    ))
}

fn format_credentials(username: Option<&str>, password: Option<&str>) -> Result<String> {
    match (username, password) {
        (None, None) => Ok(String::new()),
        (Some(username), None) => Ok(format!("{username}@")),
        (Some(username), Some(password)) => Ok(format!("{username}:{password}@")),
        (None, Some(_)) => Err(UriError::PasswordWithoutUsername.into()),
    }
}

fn format_hosts(hosts: &[HostAddress]) -> String {
    hosts
        .iter()
        .map(|address| match address.port {
            Some(port) => format!("{}:{port}", address.host),
            None => address.host.clone(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn format_options(options: &UriOptions) -> String {
    let pairs: Vec<String> = options
        .iter()
        .map(|(key, value)| match value {
            Some(value) => format!("{key}={value}"),
            None => key.to_string(),
        })
        .collect();
    format!("?{}", pairs.join("&"))
}
