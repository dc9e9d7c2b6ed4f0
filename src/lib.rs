//! # dbassert
//!
//! Database assertions for tests: check that rows matching a set of column
//! values exist in a table, or that none do, and get a readable report of what
//! the table contains when they don't.
//!
//! ## Core Principles
//!
//! - **Read-only**: assertions only ever count and select
//! - **Explicit connections**: the helper takes its connection as a value,
//!   so any backend implementing [`Connection`](query::Connection) can be used
//! - **Stable reports**: failure messages are plain text with pretty-printed
//!   JSON rows, suitable for golden-output tests
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - `rusqlite`-backed [`SqliteConnection`](query::SqliteConnection)
//!
//! ## Quick Example
//!
//! ```
//! use dbassert::prelude::*;
//! use serde_json::json;
//!
//! let connection = MemoryConnection::new();
//! connection.insert("products", json!({"id": 1, "title": "Spark"})).unwrap();
//!
//! let db = DatabaseAssertions::new(connection);
//! assert_see_in_database!(db, "products", attributes! { "title" => "Spark" });
//! assert_dont_see_in_database!(db, "products", attributes! { "title" => "Forge" });
//! ```
//!
//! ## Modules
//!
//! - [`query`]: connection and query-builder capabilities, backends
//! - [`testing`]: the assertion helper, reports, fixtures

pub use dbassert_query as query;
pub use dbassert_test as testing;

pub use dbassert_query::{AttributeSet, Connection, QueryBuilder, Row, attributes};
pub use dbassert_test::{
	AssertionError, AssertionSettings, DatabaseAssertions, assert_database_count,
	assert_dont_see_in_database, assert_see_in_database,
};

/// Re-exports for test modules
pub mod prelude {
	pub use dbassert_query::{
		AttributeSet, Connection, ConnectionError, ConnectionRegistry, MemoryConnection,
		QueryBuilder, Row, attributes,
	};
	#[cfg(feature = "sqlite")]
	pub use dbassert_query::SqliteConnection;

	pub use dbassert_test::{
		AssertionError, AssertionSettings, DatabaseAssertions, assert_database_count,
		assert_dont_see_in_database, assert_see_in_database,
	};
}

#[cfg(test)]
mod tests {
	use super::prelude::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_prelude_covers_a_full_assertion() {
		let connection = MemoryConnection::new();
		connection.insert("products", json!({"title": "Spark"})).unwrap();
		let registry = ConnectionRegistry::new().with("default", connection);

		let db = DatabaseAssertions::on(&registry, None).unwrap();

		assert_see_in_database!(db, "products", attributes! { "title" => "Spark" });
		assert_database_count!(db, "products", attributes! {}, 1);
	}

	#[cfg(feature = "sqlite")]
	#[rstest]
	fn test_sqlite_backend_is_reexported() {
		let connection = SqliteConnection::open_in_memory().unwrap();
		connection
			.execute_batch("CREATE TABLE products (title TEXT); INSERT INTO products VALUES ('Spark');")
			.unwrap();

		let db = DatabaseAssertions::new(connection);

		db.see_in_database("products", &attributes! { "title" => "Spark" })
			.unwrap();
	}
}
