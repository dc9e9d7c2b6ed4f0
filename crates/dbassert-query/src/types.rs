//! Attribute filters and result rows
//!
//! Both types are backed by `serde_json::Map` built with `preserve_order`,
//! so columns serialize in the order they were inserted.

use crate::error::{ConnectionError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// One matched record: column name to scalar value, in column order
pub type Row = Map<String, Value>;

/// Equality filter: column name to expected scalar value
///
/// Matching ignores column order, but [`Display`](fmt::Display) renders
/// compact JSON with columns in insertion order.
///
/// # Examples
///
/// ```
/// use dbassert_query::AttributeSet;
///
/// let attributes = AttributeSet::new().with("title", "Spark").with("stock", 3);
/// assert_eq!(attributes.to_string(), r#"{"title":"Spark","stock":3}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
	columns: Map<String, Value>,
}

impl AttributeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a column filter, replacing any previous value for the column
	pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(column, value);
		self
	}

	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.columns.insert(column.into(), value.into())
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.columns.get(column)
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> serde_json::map::Iter<'_> {
		self.columns.iter()
	}

	/// Check whether every filtered column of `row` equals the expected value
	///
	/// An empty set matches any row. A column missing from the row never matches.
	///
	/// # Examples
	///
	/// ```
	/// use dbassert_query::{AttributeSet, Row};
	/// use serde_json::json;
	///
	/// let mut row = Row::new();
	/// row.insert("title".to_string(), json!("Spark"));
	/// row.insert("stock".to_string(), json!(3));
	///
	/// assert!(AttributeSet::new().with("title", "Spark").matches(&row));
	/// assert!(!AttributeSet::new().with("title", "Forge").matches(&row));
	/// assert!(AttributeSet::new().matches(&row));
	/// ```
	pub fn matches(&self, row: &Row) -> bool {
		self.columns.iter().all(|(column, expected)| {
			row.get(column)
				.is_some_and(|actual| scalar_eq(actual, expected))
		})
	}

	/// Compact JSON rendering used in failure messages
	pub fn to_compact_json(&self) -> String {
		Value::Object(self.columns.clone()).to_string()
	}

	pub fn into_map(self) -> Map<String, Value> {
		self.columns
	}
}

impl fmt::Display for AttributeSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_compact_json())
	}
}

impl From<Map<String, Value>> for AttributeSet {
	fn from(columns: Map<String, Value>) -> Self {
		Self { columns }
	}
}

impl TryFrom<Value> for AttributeSet {
	type Error = ConnectionError;

	fn try_from(value: Value) -> Result<Self> {
		match value {
			Value::Object(columns) => Ok(Self { columns }),
			other => Err(ConnectionError::NotAnObject(other.to_string())),
		}
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		for (column, value) in iter {
			attributes.insert(column, value);
		}
		attributes
	}
}

impl<'a> IntoIterator for &'a AttributeSet {
	type Item = (&'a String, &'a Value);
	type IntoIter = serde_json::map::Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.iter()
	}
}

/// Build an [`AttributeSet`] from `column => value` pairs
///
/// # Examples
///
/// ```
/// use dbassert_query::attributes;
///
/// let attributes = attributes! { "title" => "Spark", "stock" => 3 };
/// assert_eq!(attributes.len(), 2);
/// ```
#[macro_export]
macro_rules! attributes {
	() => {
		$crate::AttributeSet::new()
	};
	($($column:expr => $value:expr),+ $(,)?) => {
		$crate::AttributeSet::new()$(.with($column, $value))+
	};
}

/// Convert a JSON object into a [`Row`]
pub fn row_from_value(value: Value) -> Result<Row> {
	match value {
		Value::Object(row) => Ok(row),
		other => Err(ConnectionError::NotAnObject(other.to_string())),
	}
}

/// Column equality as a database would see it
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Booleans compare
/// equal to `1` and `0`, the integers SQL backends store them as.
pub fn scalar_eq(actual: &Value, expected: &Value) -> bool {
	match (actual, expected) {
		(Value::Number(a), Value::Number(b)) => {
			a == b
				|| matches!((a.as_f64(), b.as_f64()), (Some(x), Some(y)) if x == y)
		}
		(Value::Bool(flag), Value::Number(n)) | (Value::Number(n), Value::Bool(flag)) => {
			n.as_f64() == Some(if *flag { 1.0 } else { 0.0 })
		}
		_ => actual == expected,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_display_preserves_insertion_order() {
		let attributes = AttributeSet::new()
			.with("zeta", 1)
			.with("alpha", "a")
			.with("mid", true);

		assert_eq!(attributes.to_string(), r#"{"zeta":1,"alpha":"a","mid":true}"#);
	}

	#[rstest]
	fn test_with_replaces_existing_column() {
		let attributes = AttributeSet::new().with("title", "Spark").with("title", "Forge");

		assert_eq!(attributes.len(), 1);
		assert_eq!(attributes.get("title"), Some(&json!("Forge")));
	}

	#[rstest]
	fn test_try_from_rejects_non_object() {
		let result = AttributeSet::try_from(json!(["title", "Spark"]));

		assert!(matches!(result, Err(ConnectionError::NotAnObject(_))));
	}

	#[rstest]
	fn test_macro_builds_same_set_as_builder() {
		let from_macro = attributes! { "title" => "Spark", "stock" => 3 };
		let from_builder = AttributeSet::new().with("title", "Spark").with("stock", 3);

		assert_eq!(from_macro, from_builder);
		assert!(attributes!().is_empty());
	}

	#[rstest]
	#[case(json!(1), json!(1.0), true)]
	#[case(json!(2), json!(1), false)]
	#[case(json!("1"), json!(1), false)]
	#[case(json!(null), json!(null), true)]
	#[case(json!(true), json!(true), true)]
	#[case(json!(1), json!(true), true)]
	#[case(json!(false), json!(0), true)]
	#[case(json!(2), json!(true), false)]
	#[case(json!(0), json!(true), false)]
	fn test_scalar_eq(#[case] actual: Value, #[case] expected: Value, #[case] equal: bool) {
		assert_eq!(scalar_eq(&actual, &expected), equal);
	}

	#[rstest]
	fn test_bool_filter_matches_integer_column() {
		let row = row_from_value(json!({"title": "Spark", "active": 1})).unwrap();

		assert!(AttributeSet::new().with("active", true).matches(&row));
		assert!(!AttributeSet::new().with("active", false).matches(&row));
	}

	#[rstest]
	fn test_missing_column_never_matches() {
		let row = row_from_value(json!({"title": "Spark"})).unwrap();

		assert!(!AttributeSet::new().with("stock", json!(null)).matches(&row));
	}
}
