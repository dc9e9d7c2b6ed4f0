//! Panicking wrappers around [`DatabaseAssertions`](crate::DatabaseAssertions)
//!
//! For test bodies that do not return `Result`. The panic message is the full
//! failure report.

/// Panic unless a row of the table matches the attributes
///
/// # Examples
///
/// ```
/// use dbassert_query::{MemoryConnection, attributes};
/// use dbassert_test::{DatabaseAssertions, assert_see_in_database};
/// use serde_json::json;
///
/// let connection = MemoryConnection::new();
/// connection.insert("products", json!({"title": "Spark"})).unwrap();
/// let db = DatabaseAssertions::new(connection);
///
/// assert_see_in_database!(db, "products", attributes! { "title" => "Spark" });
/// ```
#[macro_export]
macro_rules! assert_see_in_database {
	($helper:expr, $table:expr, $attributes:expr $(,)?) => {
		if let Err(err) = $helper.see_in_database($table, &$attributes) {
			panic!("{}", err);
		}
	};
}

/// Panic if any row of the table matches the attributes
///
/// # Examples
///
/// ```
/// use dbassert_query::{MemoryConnection, attributes};
/// use dbassert_test::{DatabaseAssertions, assert_dont_see_in_database};
///
/// let db = DatabaseAssertions::new(MemoryConnection::new());
///
/// assert_dont_see_in_database!(db, "products", attributes! { "title" => "Spark" });
/// ```
#[macro_export]
macro_rules! assert_dont_see_in_database {
	($helper:expr, $table:expr, $attributes:expr $(,)?) => {
		if let Err(err) = $helper.dont_see_in_database($table, &$attributes) {
			panic!("{}", err);
		}
	};
}

/// Panic unless exactly `count` rows of the table match the attributes
#[macro_export]
macro_rules! assert_database_count {
	($helper:expr, $table:expr, $attributes:expr, $count:expr $(,)?) => {
		if let Err(err) = $helper.assert_database_count($table, &$attributes, $count) {
			panic!("{}", err);
		}
	};
}
