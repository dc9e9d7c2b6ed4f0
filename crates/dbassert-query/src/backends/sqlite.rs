//! SQLite backend
//!
//! Filters become `WHERE "column" = ?n` clauses with bound parameters; a
//! `null` attribute becomes `"column" IS NULL`. Identifiers are double-quoted
//! with embedded quotes doubled.
//!
//! SQLite reads a double-quoted name that matches no column as a string
//! literal, so filter columns are checked against `pragma_table_info` before
//! the statement runs.

use crate::connection::{Connection, QueryBuilder};
use crate::error::{ConnectionError, Result};
use crate::types::{AttributeSet, Row};
use parking_lot::Mutex;
use rusqlite::types::{Value as SqlValue, ValueRef};
use serde_json::{Number, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Connection wrapper around a `rusqlite::Connection`
///
/// Clones share the underlying connection. Setup statements (schema, fixture
/// rows) go through [`execute_batch`](Self::execute_batch); the query side
/// only ever issues `SELECT`.
#[derive(Clone)]
pub struct SqliteConnection {
	conn: Arc<Mutex<rusqlite::Connection>>,
}

impl SqliteConnection {
	pub fn open_in_memory() -> Result<Self> {
		Ok(Self::from_connection(rusqlite::Connection::open_in_memory()?))
	}

	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Ok(Self::from_connection(rusqlite::Connection::open(path)?))
	}

	pub fn from_connection(conn: rusqlite::Connection) -> Self {
		Self {
			conn: Arc::new(Mutex::new(conn)),
		}
	}

	pub fn execute_batch(&self, sql: &str) -> Result<()> {
		self.conn.lock().execute_batch(sql)?;
		Ok(())
	}

	/// Run `f` with exclusive access to the raw connection
	pub fn with_connection<T>(
		&self,
		f: impl FnOnce(&rusqlite::Connection) -> rusqlite::Result<T>,
	) -> Result<T> {
		let conn = self.conn.lock();
		Ok(f(&conn)?)
	}
}

impl std::fmt::Debug for SqliteConnection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SqliteConnection").finish_non_exhaustive()
	}
}

impl Connection for SqliteConnection {
	type Query = SqliteQuery;

	fn table(&self, name: &str) -> SqliteQuery {
		SqliteQuery {
			conn: Arc::clone(&self.conn),
			table: name.to_string(),
			filters: Vec::new(),
			limit: None,
		}
	}
}

/// `SELECT` against one SQLite table
#[derive(Clone)]
pub struct SqliteQuery {
	conn: Arc<Mutex<rusqlite::Connection>>,
	table: String,
	filters: Vec<(String, Value)>,
	limit: Option<usize>,
}

impl SqliteQuery {
	fn where_clause(&self) -> Result<(String, Vec<SqlValue>)> {
		if self.filters.is_empty() {
			return Ok((String::new(), Vec::new()));
		}

		let mut conditions = Vec::with_capacity(self.filters.len());
		let mut params = Vec::new();
		for (column, value) in &self.filters {
			if value.is_null() {
				conditions.push(format!("{} IS NULL", quote_identifier(column)));
			} else {
				params.push(bind_value(column, value)?);
				conditions.push(format!("{} = ?{}", quote_identifier(column), params.len()));
			}
		}

		Ok((format!(" WHERE {}", conditions.join(" AND ")), params))
	}

	/// Reject filter columns the table does not have
	///
	/// A table with no reported columns does not exist; the query itself
	/// reports that.
	fn check_columns(&self, conn: &rusqlite::Connection) -> Result<()> {
		if self.filters.is_empty() {
			return Ok(());
		}

		let mut stmt = conn.prepare_cached("SELECT name FROM pragma_table_info(?1)")?;
		let known = stmt
			.query_map([&self.table], |row| row.get::<_, String>(0))?
			.collect::<rusqlite::Result<Vec<_>>>()?;
		if known.is_empty() {
			return Ok(());
		}

		match self
			.filters
			.iter()
			.find(|(column, _)| !known.iter().any(|name| name.eq_ignore_ascii_case(column)))
		{
			Some((column, _)) => Err(ConnectionError::UnknownColumn {
				table: self.table.clone(),
				column: column.clone(),
			}),
			None => Ok(()),
		}
	}

	/// SQL text and parameters for the row fetch
	pub fn select_sql(&self) -> Result<(String, Vec<SqlValue>)> {
		let (clause, params) = self.where_clause()?;
		let mut sql = format!("SELECT * FROM {}{}", quote_identifier(&self.table), clause);
		if let Some(limit) = self.limit {
			sql.push_str(&format!(" LIMIT {}", limit));
		}
		Ok((sql, params))
	}

	/// SQL text and parameters for the count
	pub fn count_sql(&self) -> Result<(String, Vec<SqlValue>)> {
		let (clause, params) = self.where_clause()?;
		Ok((
			format!("SELECT COUNT(*) FROM {}{}", quote_identifier(&self.table), clause),
			params,
		))
	}
}

impl QueryBuilder for SqliteQuery {
	fn filter(mut self, attributes: &AttributeSet) -> Self {
		self.filters.extend(
			attributes
				.iter()
				.map(|(column, value)| (column.clone(), value.clone())),
		);
		self
	}

	fn take(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	fn count(&self) -> Result<u64> {
		let (sql, params) = self.count_sql()?;
		debug!(sql = %sql, "sqlite count");

		let conn = self.conn.lock();
		self.check_columns(&conn)?;
		let count: i64 =
			conn.query_row(&sql, rusqlite::params_from_iter(params.iter()), |row| row.get(0))?;
		u64::try_from(count).map_err(|e| ConnectionError::Backend(e.to_string()))
	}

	fn get(&self) -> Result<Vec<Row>> {
		let (sql, params) = self.select_sql()?;
		debug!(sql = %sql, "sqlite select");

		let conn = self.conn.lock();
		self.check_columns(&conn)?;
		let mut stmt = conn.prepare(&sql)?;
		let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

		let rows = stmt
			.query_map(rusqlite::params_from_iter(params.iter()), |row| {
				let mut record = Row::new();
				for (index, column) in columns.iter().enumerate() {
					record.insert(column.clone(), json_from_sql(row.get_ref(index)?));
				}
				Ok(record)
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(rows)
	}
}

/// Quote an SQLite identifier, doubling embedded quotes
pub fn quote_identifier(identifier: &str) -> String {
	format!("\"{}\"", identifier.replace('"', "\"\""))
}

fn bind_value(column: &str, value: &Value) -> Result<SqlValue> {
	match value {
		Value::Null => Ok(SqlValue::Null),
		Value::Bool(b) => Ok(SqlValue::Integer(i64::from(*b))),
		Value::Number(n) => {
			if let Some(i) = n.as_i64() {
				Ok(SqlValue::Integer(i))
			} else if let Some(f) = n.as_f64() {
				Ok(SqlValue::Real(f))
			} else {
				Err(unsupported(column, value))
			}
		}
		Value::String(s) => Ok(SqlValue::Text(s.clone())),
		Value::Array(_) | Value::Object(_) => Err(unsupported(column, value)),
	}
}

fn unsupported(column: &str, value: &Value) -> ConnectionError {
	ConnectionError::UnsupportedValue {
		column: column.to_string(),
		value: value.to_string(),
	}
}

fn json_from_sql(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Null,
		ValueRef::Integer(i) => Value::from(i),
		ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
		ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
		ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
	}
}
