//! Structured representation of a connection string
//!
//! A [`ConnectionUri`] is the record produced by [`crate::parse`] and consumed by
//! [`crate::format`]. Every field is optional so that the empty record returned
//! for a non-matching input is a regular value rather than an error.
//!
//! Absent fields are skipped on serialization, never written as `null`, which
//! keeps the JSON and BSON shapes identical to what the parser produces.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A parsed connection string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionUri {
    /// Protocol identifier before `://`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Username from the credentials segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password from the credentials segment, only set together with `username`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Hosts in failover order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<HostAddress>>,

    /// Database name, possibly empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Query options in the order they were given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<UriOptions>,
}

/// One entry of the host list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostAddress {
    pub host: String,

    /// `None` when the port was missing or not a valid port number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Ordered option map of the `?key=value&...` segment.
///
/// A key given without `=` maps to `None`. Inserting an existing key replaces
/// its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UriOptions(IndexMap<String, Option<String>>);

impl ConnectionUri {
    /// Create a builder for a connection string record
    pub fn builder() -> ConnectionUriBuilder {
        ConnectionUriBuilder::default()
    }

    /// True for the record returned when the input did not match
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Format this record back into a connection string
    pub fn to_uri_string(&self) -> Result<String> {
        crate::formatter::format(self)
    }

    /// Convert to a BSON document with the same shape as the JSON form
    pub fn to_document(&self) -> Result<bson::Document> {
        Ok(bson::to_document(self)?)
    }

    /// Serialize to a compact JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl HostAddress {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl UriOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, returning the previous value if the key existed
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        self.0.insert(key.into(), value)
    }

    /// Look up an option value.
    ///
    /// Returns `Some(None)` for a key that was given without a value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K, V> FromIterator<(K, V)> for UriOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

/// Builder for [`ConnectionUri`].
///
/// No validation happens here; formatting checks its own preconditions.
#[derive(Debug, Default)]
pub struct ConnectionUriBuilder {
    uri: ConnectionUri,
}

impl ConnectionUriBuilder {
    /// Set the scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.uri.scheme = Some(scheme.into());
        self
    }

    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.uri.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.uri.password = Some(password.into());
        self
    }

    /// Append a host with a port
    pub fn host(self, host: impl Into<String>, port: u16) -> Self {
        self.host_address(HostAddress::new(host, Some(port)))
    }

    /// Append a host without a port
    pub fn host_without_port(self, host: impl Into<String>) -> Self {
        self.host_address(HostAddress::new(host, None))
    }

    /// Append a host entry
    pub fn host_address(mut self, address: HostAddress) -> Self {
        self.uri.hosts.get_or_insert_with(Vec::new).push(address);
        self
    }

    /// Set the database name
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.uri.database = Some(database.into());
        self
    }

    /// Add a `key=value` option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.uri
            .options
            .get_or_insert_with(UriOptions::new)
            .insert(key, Some(value.into()));
        self
    }

    /// Add an option key without a value
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.uri
            .options
            .get_or_insert_with(UriOptions::new)
            .insert(key, None);
        self
    }

    /// Build the record
    pub fn build(self) -> ConnectionUri {
        self.uri
    }
}
