//! Scripted test doubles and rstest fixtures
//!
//! [`StubConnection`] and [`StubQuery`] implement the connection traits
//! directly. Every builder call is recorded, and `count`/`get` return the
//! scripted values whatever the filters and limit are, which makes them
//! suitable for pinning down exactly which queries a helper issues.

use dbassert_query::{AttributeSet, Connection, ConnectionError, QueryBuilder, Row, attributes};
use parking_lot::Mutex;
use rstest::fixture;
use std::sync::Arc;

/// One recorded builder call
#[derive(Debug, Clone, PartialEq)]
pub enum QueryCall {
	Filter(AttributeSet),
	Take(usize),
	Count,
	Get,
}

/// Query double returning scripted results
///
/// Clones share the call log.
///
/// # Examples
///
/// ```
/// use dbassert_query::{AttributeSet, QueryBuilder};
/// use dbassert_test::fixtures::{QueryCall, StubQuery};
///
/// let query = StubQuery::new().with_count(2);
/// let filtered = query.clone().filter(&AttributeSet::new()).take(1);
///
/// assert_eq!(filtered.count().unwrap(), 2);
/// assert_eq!(
///     query.calls(),
///     vec![QueryCall::Filter(AttributeSet::new()), QueryCall::Take(1), QueryCall::Count]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubQuery {
	count: u64,
	rows: Vec<Row>,
	error: Option<String>,
	calls: Arc<Mutex<Vec<QueryCall>>>,
}

impl StubQuery {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_count(mut self, count: u64) -> Self {
		self.count = count;
		self
	}

	/// Rows returned by `get`; `take` does not truncate them
	pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
		self.rows = rows;
		self
	}

	/// Make `count` and `get` fail with a backend error
	pub fn with_error(mut self, message: impl Into<String>) -> Self {
		self.error = Some(message.into());
		self
	}

	pub fn calls(&self) -> Vec<QueryCall> {
		self.calls.lock().clone()
	}

	fn record(&self, call: QueryCall) {
		self.calls.lock().push(call);
	}

	fn check_error(&self) -> dbassert_query::Result<()> {
		match &self.error {
			Some(message) => Err(ConnectionError::Backend(message.clone())),
			None => Ok(()),
		}
	}
}

impl QueryBuilder for StubQuery {
	fn filter(self, attributes: &AttributeSet) -> Self {
		self.record(QueryCall::Filter(attributes.clone()));
		self
	}

	fn take(self, limit: usize) -> Self {
		self.record(QueryCall::Take(limit));
		self
	}

	fn count(&self) -> dbassert_query::Result<u64> {
		self.record(QueryCall::Count);
		self.check_error()?;
		Ok(self.count)
	}

	fn get(&self) -> dbassert_query::Result<Vec<Row>> {
		self.record(QueryCall::Get);
		self.check_error()?;
		Ok(self.rows.clone())
	}
}

/// Connection double handing out one scripted query for every table
#[derive(Debug, Clone, Default)]
pub struct StubConnection {
	query: StubQuery,
	tables: Arc<Mutex<Vec<String>>>,
}

impl StubConnection {
	pub fn new(query: StubQuery) -> Self {
		Self {
			query,
			tables: Arc::new(Mutex::new(Vec::new())),
		}
	}

	/// Table names passed to `table`, in call order
	pub fn tables_requested(&self) -> Vec<String> {
		self.tables.lock().clone()
	}

	/// Builder calls made on any query handed out
	pub fn calls(&self) -> Vec<QueryCall> {
		self.query.calls()
	}
}

impl Connection for StubConnection {
	type Query = StubQuery;

	fn table(&self, name: &str) -> StubQuery {
		self.tables.lock().push(name.to_string());
		self.query.clone()
	}
}

/// Attributes `{"title": "Spark"}` on the `products` table
#[fixture]
pub fn products_attributes() -> AttributeSet {
	attributes! { "title" => "Spark" }
}

/// Connection double whose count finds nothing and whose table is empty
#[fixture]
pub fn empty_connection() -> StubConnection {
	StubConnection::new(StubQuery::new().with_count(0))
}
