//! Read-only connection capabilities
//!
//! A [`Connection`] hands out a [`QueryBuilder`] per table. Builders are
//! narrowed with [`QueryBuilder::filter`] and [`QueryBuilder::take`] and then
//! executed with [`QueryBuilder::count`] or [`QueryBuilder::get`]. Nothing in
//! this interface can write to the database.

use crate::error::Result;
use crate::types::{AttributeSet, Row};
use std::rc::Rc;
use std::sync::Arc;

/// Query against a single table
pub trait QueryBuilder: Sized {
	/// Restrict the query to rows equal to every attribute
	fn filter(self, attributes: &AttributeSet) -> Self;

	/// Limit the number of rows returned by [`get`](Self::get)
	///
	/// The limit does not affect [`count`](Self::count).
	fn take(self, limit: usize) -> Self;

	/// Number of rows matching the filters
	fn count(&self) -> Result<u64>;

	/// Rows matching the filters, in storage order, up to the limit
	fn get(&self) -> Result<Vec<Row>>;
}

/// Source of table queries
pub trait Connection {
	type Query: QueryBuilder;

	fn table(&self, name: &str) -> Self::Query;
}

impl<C: Connection + ?Sized> Connection for &C {
	type Query = C::Query;

	fn table(&self, name: &str) -> Self::Query {
		(**self).table(name)
	}
}

impl<C: Connection + ?Sized> Connection for Arc<C> {
	type Query = C::Query;

	fn table(&self, name: &str) -> Self::Query {
		(**self).table(name)
	}
}

impl<C: Connection + ?Sized> Connection for Rc<C> {
	type Query = C::Query;

	fn table(&self, name: &str) -> Self::Query {
		(**self).table(name)
	}
}
