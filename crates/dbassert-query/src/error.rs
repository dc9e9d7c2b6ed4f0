//! Error types for connection and query capabilities

/// Result type for query operations
pub type Result<T> = std::result::Result<T, ConnectionError>;

/// Errors raised by a connection or query builder
///
/// These are distinct from assertion failures: a failing query means the
/// check could not be performed at all.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
	/// No connection registered under the requested name
	#[error("Database connection [{0}] is not configured")]
	UnknownConnection(String),

	/// Attribute or row value that cannot be bound as a scalar parameter
	#[error("Unsupported value for column [{column}]: {value}")]
	UnsupportedValue {
		/// Column the value was supplied for
		column: String,
		/// Compact JSON of the rejected value
		value: String,
	},

	/// Filter on a column the table does not have
	#[error("Table [{table}] has no column [{column}]")]
	UnknownColumn { table: String, column: String },

	/// Attributes or rows that are not a JSON object
	#[error("Expected a JSON object of column values, got: {0}")]
	NotAnObject(String),

	/// Backend-specific failure
	#[error("Backend error: {0}")]
	Backend(String),

	/// SQLite driver error
	#[cfg(feature = "sqlite")]
	#[error("SQLite error: {0}")]
	Sqlite(#[from] rusqlite::Error),
}
