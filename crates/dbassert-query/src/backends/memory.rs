//! In-memory backend
//!
//! Tables are plain vectors of rows shared behind a lock, so clones of a
//! [`MemoryConnection`] see the same data. Useful as a direct test double
//! for code written against [`Connection`].

use crate::connection::{Connection, QueryBuilder};
use crate::error::{ConnectionError, Result};
use crate::types::{AttributeSet, Row, row_from_value};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

type Tables = Arc<RwLock<HashMap<String, Vec<Row>>>>;

/// Connection over in-memory tables
///
/// A table that was never written to behaves as an empty table.
///
/// # Examples
///
/// ```
/// use dbassert_query::{Connection, MemoryConnection, QueryBuilder, attributes};
/// use serde_json::json;
///
/// let connection = MemoryConnection::new();
/// connection.insert("products", json!({"title": "Spark"})).unwrap();
/// connection.insert("products", json!({"title": "Forge"})).unwrap();
///
/// let query = connection.table("products").filter(&attributes! { "title" => "Forge" });
/// assert_eq!(query.count().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
	tables: Tables,
}

impl MemoryConnection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a JSON object as a row of `table`
	pub fn insert(&self, table: &str, row: Value) -> Result<()> {
		let row = row_from_value(row)?;
		self.insert_row(table, row);
		Ok(())
	}

	pub fn insert_row(&self, table: &str, row: Row) {
		self.tables
			.write()
			.entry(table.to_string())
			.or_default()
			.push(row);
	}

	/// Append several JSON objects to `table`
	pub fn insert_many(&self, table: &str, rows: impl IntoIterator<Item = Value>) -> Result<()> {
		let rows = rows
			.into_iter()
			.map(row_from_value)
			.collect::<Result<Vec<_>>>()?;
		self.tables
			.write()
			.entry(table.to_string())
			.or_default()
			.extend(rows);
		Ok(())
	}

	/// Remove every row of `table`
	pub fn truncate(&self, table: &str) {
		self.tables.write().remove(table);
	}

	/// Snapshot of all rows of `table`
	pub fn rows(&self, table: &str) -> Vec<Row> {
		self.tables.read().get(table).cloned().unwrap_or_default()
	}
}

impl Connection for MemoryConnection {
	type Query = MemoryQuery;

	fn table(&self, name: &str) -> MemoryQuery {
		MemoryQuery {
			tables: Arc::clone(&self.tables),
			table: name.to_string(),
			filters: Vec::new(),
			limit: None,
		}
	}
}

/// Query over one in-memory table
#[derive(Debug, Clone)]
pub struct MemoryQuery {
	tables: Tables,
	table: String,
	filters: Vec<AttributeSet>,
	limit: Option<usize>,
}

impl MemoryQuery {
	fn matching(&self) -> Vec<Row> {
		let tables = self.tables.read();
		let Some(rows) = tables.get(&self.table) else {
			return Vec::new();
		};
		rows.iter()
			.filter(|row| self.filters.iter().all(|filter| filter.matches(row)))
			.cloned()
			.collect()
	}
}

impl QueryBuilder for MemoryQuery {
	fn filter(mut self, attributes: &AttributeSet) -> Self {
		self.filters.push(attributes.clone());
		self
	}

	fn take(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	fn count(&self) -> Result<u64> {
		u64::try_from(self.matching().len())
			.map_err(|e| ConnectionError::Backend(e.to_string()))
	}

	fn get(&self) -> Result<Vec<Row>> {
		let mut rows = self.matching();
		if let Some(limit) = self.limit {
			rows.truncate(limit);
		}
		Ok(rows)
	}
}
