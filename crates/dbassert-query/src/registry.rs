//! Named connections
//!
//! Test suites that talk to more than one database register each connection
//! under a name and resolve it when building an assertion helper. Swapping a
//! backend for tests is a matter of registering a different value under the
//! same name.

use crate::connection::Connection;
use crate::error::{ConnectionError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Name resolved when no connection name is given
pub const DEFAULT_CONNECTION: &str = "default";

/// Registry of connections keyed by name
///
/// # Examples
///
/// ```
/// use dbassert_query::{ConnectionRegistry, MemoryConnection};
///
/// let registry = ConnectionRegistry::new()
///     .with("default", MemoryConnection::new())
///     .with("analytics", MemoryConnection::new());
///
/// assert!(registry.connection(None).is_ok());
/// assert!(registry.connection(Some("analytics")).is_ok());
/// assert!(registry.connection(Some("billing")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionRegistry<C> {
	connections: HashMap<String, C>,
	default: String,
}

impl<C> ConnectionRegistry<C> {
	pub fn new() -> Self {
		Self {
			connections: HashMap::new(),
			default: DEFAULT_CONNECTION.to_string(),
		}
	}

	/// Register a connection, returning the one it replaced
	pub fn register(&mut self, name: impl Into<String>, connection: C) -> Option<C> {
		let name = name.into();
		debug!(connection = %name, "registering database connection");
		self.connections.insert(name, connection)
	}

	pub fn with(mut self, name: impl Into<String>, connection: C) -> Self {
		self.register(name, connection);
		self
	}

	/// Change which name `None` resolves to
	pub fn set_default(&mut self, name: impl Into<String>) {
		self.default = name.into();
	}

	pub fn default_name(&self) -> &str {
		&self.default
	}

	pub fn contains(&self, name: &str) -> bool {
		self.connections.contains_key(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.connections.keys().map(String::as_str)
	}

	/// Resolve a connection by name, or the default connection for `None`
	pub fn connection(&self, name: Option<&str>) -> Result<&C>
	where
		C: Connection,
	{
		let name = name.unwrap_or(&self.default);
		self.connections
			.get(name)
			.ok_or_else(|| ConnectionError::UnknownConnection(name.to_string()))
	}
}

impl<C> Default for ConnectionRegistry<C> {
	fn default() -> Self {
		Self::new()
	}
}
