//! Database assertions
//!
//! [`DatabaseAssertions`] checks whether rows matching a set of attributes
//! exist in a table. It only issues reads: a filtered `count`, and on failure
//! one bounded `take`/`get` to show what the table holds.

use crate::diagnostics::describe_sample;
use crate::error::{AssertionError, Result};
use crate::settings::AssertionSettings;
use dbassert_query::{AttributeSet, Connection, ConnectionRegistry, QueryBuilder};
use tracing::{debug, warn};

/// Assertion helper bound to one connection
///
/// # Examples
///
/// ```
/// use dbassert_query::{MemoryConnection, attributes};
/// use dbassert_test::DatabaseAssertions;
/// use serde_json::json;
///
/// let connection = MemoryConnection::new();
/// connection.insert("products", json!({"title": "Spark"})).unwrap();
///
/// let db = DatabaseAssertions::new(connection);
/// assert!(db.see_in_database("products", &attributes! { "title" => "Spark" }).is_ok());
/// assert!(db.dont_see_in_database("products", &attributes! { "title" => "Forge" }).is_ok());
///
/// let err = db.see_in_database("products", &attributes! { "title" => "Forge" }).unwrap_err();
/// assert!(err.to_string().starts_with(
///     "Unable to find row in database table [products] that matched attributes [{\"title\":\"Forge\"}]."
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseAssertions<C> {
	connection: C,
	sample_size: usize,
}

impl<C: Connection> DatabaseAssertions<C> {
	pub fn new(connection: C) -> Self {
		Self {
			connection,
			sample_size: AssertionSettings::default().sample_size,
		}
	}

	pub fn with_settings(connection: C, settings: &AssertionSettings) -> Result<Self> {
		settings.validate()?;
		Ok(Self {
			connection,
			sample_size: settings.sample_size,
		})
	}

	/// Change how many rows a failure report shows (at least one)
	pub fn with_sample_size(mut self, sample_size: usize) -> Self {
		self.sample_size = sample_size.max(1);
		self
	}

	pub fn connection(&self) -> &C {
		&self.connection
	}

	pub fn sample_size(&self) -> usize {
		self.sample_size
	}

	/// Assert that at least one row of `table` matches `attributes`
	///
	/// On failure the report samples the unfiltered table, so it shows the
	/// rows that exist instead of the ones that were expected.
	pub fn see_in_database(&self, table: &str, attributes: &AttributeSet) -> Result<()> {
		ensure_table(table)?;

		let count = self.connection.table(table).filter(attributes).count()?;
		debug!(table, attributes = %attributes, count, "see_in_database");
		if count > 0 {
			return Ok(());
		}

		let sample = self.connection.table(table).take(self.sample_size).get()?;
		Err(AssertionError::AssertionFailed(format!(
			"Unable to find row in database table [{}] that matched attributes [{}].\n\n{}",
			table,
			attributes,
			describe_sample(0, &sample, self.sample_size)
		)))
	}

	/// Assert that no row of `table` matches `attributes`
	///
	/// On failure the report samples the matching rows.
	pub fn dont_see_in_database(&self, table: &str, attributes: &AttributeSet) -> Result<()> {
		ensure_table(table)?;

		let query = self.connection.table(table).filter(attributes);
		let count = query.count()?;
		debug!(table, attributes = %attributes, count, "dont_see_in_database");
		if count == 0 {
			return Ok(());
		}

		let sample = query.take(self.sample_size).get()?;
		if sample.is_empty() {
			warn!(table, count, "matching rows were counted but none were returned");
		}
		Err(AssertionError::AssertionFailed(format!(
			"a row in the table [{}] does not match the attributes {}\n\n{}",
			table,
			attributes,
			describe_sample(count, &sample, self.sample_size)
		)))
	}

	/// Alias of [`dont_see_in_database`](Self::dont_see_in_database)
	pub fn missing_from_database(&self, table: &str, attributes: &AttributeSet) -> Result<()> {
		self.dont_see_in_database(table, attributes)
	}

	/// Assert that exactly `expected` rows of `table` match `attributes`
	pub fn assert_database_count(
		&self,
		table: &str,
		attributes: &AttributeSet,
		expected: u64,
	) -> Result<()> {
		ensure_table(table)?;

		let query = self.connection.table(table).filter(attributes);
		let count = query.count()?;
		debug!(table, attributes = %attributes, count, expected, "assert_database_count");
		if count == expected {
			return Ok(());
		}

		let sample = query.take(self.sample_size).get()?;
		Err(AssertionError::AssertionFailed(format!(
			"Expected table [{}] to contain {} row(s) matching attributes {}, found {}.\n\n{}",
			table,
			expected,
			attributes,
			count,
			describe_sample(count, &sample, self.sample_size)
		)))
	}

	/// Assert that `table` has at least one row
	pub fn assert_database_has(&self, table: &str) -> Result<()> {
		self.see_in_database(table, &AttributeSet::new())
	}

	/// Assert that `table` has no rows
	pub fn assert_database_empty(&self, table: &str) -> Result<()> {
		self.dont_see_in_database(table, &AttributeSet::new())
	}
}

impl<'r, C: Connection> DatabaseAssertions<&'r C> {
	/// Build a helper for a named connection, or the default one for `None`
	pub fn on(registry: &'r ConnectionRegistry<C>, name: Option<&str>) -> Result<Self> {
		Ok(Self::new(registry.connection(name)?))
	}
}

fn ensure_table(table: &str) -> Result<()> {
	if table.trim().is_empty() {
		return Err(AssertionError::AssertionFailed(
			"Table name must not be empty.".to_string(),
		));
	}
	Ok(())
}
