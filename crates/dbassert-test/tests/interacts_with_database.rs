//! Golden-message tests for the database assertions
//!
//! The connection is a scripted double: `count` and `get` return fixed values
//! regardless of filters and limits, so each case controls exactly what the
//! helper observes.

use dbassert_query::{AttributeSet, Connection, Row, row_from_value};
use dbassert_test::diagnostics::pretty_json;
use dbassert_test::fixtures::{
	StubConnection, StubQuery, empty_connection, products_attributes,
};
use dbassert_test::logging::init_test_logging;
use dbassert_test::{AssertionError, DatabaseAssertions};
use mockall::mock;
use rstest::rstest;
use serde_json::json;

const TABLE: &str = "products";

mock! {
	/// Connection that checks which table is requested and how often
	pub Database {}

	impl Connection for Database {
		type Query = StubQuery;

		fn table(&self, name: &str) -> StubQuery;
	}
}

fn row(value: serde_json::Value) -> Row {
	row_from_value(value).unwrap()
}

fn failure_message(err: AssertionError) -> String {
	assert!(err.is_assertion_failure(), "expected assertion failure, got {err:?}");
	err.to_string()
}

#[rstest]
fn test_see_in_database_finds_results(products_attributes: AttributeSet) {
	init_test_logging();
	let mut database = MockDatabase::new();
	database
		.expect_table()
		.withf(|name| name == TABLE)
		.times(1)
		.returning(|_| StubQuery::new().with_count(1));

	let db = DatabaseAssertions::new(database);

	db.see_in_database(TABLE, &products_attributes).unwrap();
}

#[rstest]
fn test_see_in_database_does_not_find_results(
	empty_connection: StubConnection,
	products_attributes: AttributeSet,
) {
	let db = DatabaseAssertions::new(&empty_connection);

	let err = db.see_in_database(TABLE, &products_attributes).unwrap_err();

	let message = failure_message(err);
	assert_eq!(
		message,
		"Unable to find row in database table [products] that matched attributes [{\"title\":\"Spark\"}].\n\nThe table is empty."
	);
	assert!(message.ends_with("The table is empty."));
}

#[rstest]
fn test_see_in_database_finds_not_matching_results(products_attributes: AttributeSet) {
	let forge = vec![row(json!({"title": "Forge"}))];
	let connection = StubConnection::new(StubQuery::new().with_count(0).with_rows(forge.clone()));
	let db = DatabaseAssertions::new(&connection);

	let err = db.see_in_database(TABLE, &products_attributes).unwrap_err();

	let message = failure_message(err);
	assert!(message.ends_with(&format!("Found: {}", pretty_json(&forge))));
	assert!(message.ends_with("Found: [\n  {\n    \"title\": \"Forge\"\n  }\n]"));
}

#[rstest]
fn test_see_in_database_finds_many_not_matching_results(products_attributes: AttributeSet) {
	let rows: Vec<Row> = (0..5).map(|_| row(json!({"title": "data"}))).collect();
	let connection = StubConnection::new(StubQuery::new().with_count(0).with_rows(rows.clone()));
	let db = DatabaseAssertions::new(&connection);

	let err = db.see_in_database(TABLE, &products_attributes).unwrap_err();

	let message = failure_message(err);
	assert!(message.ends_with(&format!("Found: {} and 2 others.", pretty_json(&rows[..3]))));
}

#[rstest]
fn test_dont_see_in_database_does_not_find_results(
	empty_connection: StubConnection,
	products_attributes: AttributeSet,
) {
	let db = DatabaseAssertions::new(&empty_connection);

	db.dont_see_in_database(TABLE, &products_attributes).unwrap();
}

#[rstest]
fn test_dont_see_in_database_finds_results(products_attributes: AttributeSet) {
	let spark = vec![row(json!({"title": "Spark"}))];
	let mut database = MockDatabase::new();
	let query = StubQuery::new().with_count(1).with_rows(spark.clone());
	database
		.expect_table()
		.withf(|name| name == TABLE)
		.times(1)
		.returning(move |_| query.clone());

	let db = DatabaseAssertions::new(database);

	let err = db.dont_see_in_database(TABLE, &products_attributes).unwrap_err();

	let message = failure_message(err);
	assert!(message.starts_with(
		"a row in the table [products] does not match the attributes {\"title\":\"Spark\"}"
	));
	assert!(message.ends_with(&format!("Found: {}", pretty_json(&spark))));
}

#[rstest]
fn test_dont_see_in_database_with_empty_sample_reports_empty_table(
	products_attributes: AttributeSet,
) {
	let connection = StubConnection::new(StubQuery::new().with_count(2));
	let db = DatabaseAssertions::new(&connection);

	let err = db.dont_see_in_database(TABLE, &products_attributes).unwrap_err();

	assert_eq!(
		failure_message(err),
		"a row in the table [products] does not match the attributes {\"title\":\"Spark\"}\n\nThe table is empty."
	);
}

#[rstest]
fn test_dont_see_in_database_counts_others_from_total(products_attributes: AttributeSet) {
	let sample: Vec<Row> = (1..=3).map(|id| row(json!({"id": id, "title": "Spark"}))).collect();
	let connection = StubConnection::new(StubQuery::new().with_count(8).with_rows(sample.clone()));
	let db = DatabaseAssertions::new(&connection);

	let err = db.dont_see_in_database(TABLE, &products_attributes).unwrap_err();

	assert!(failure_message(err).ends_with(&format!(
		"Found: {} and 5 others.",
		pretty_json(&sample)
	)));
}

#[rstest]
fn test_repeated_assertions_give_identical_outcomes(products_attributes: AttributeSet) {
	let connection = StubConnection::new(
		StubQuery::new()
			.with_count(0)
			.with_rows(vec![row(json!({"title": "Forge"}))]),
	);
	let db = DatabaseAssertions::new(&connection);

	let first = db.see_in_database(TABLE, &products_attributes).unwrap_err();
	let second = db.see_in_database(TABLE, &products_attributes).unwrap_err();
	assert_eq!(first.to_string(), second.to_string());

	db.dont_see_in_database(TABLE, &products_attributes).unwrap();
	db.dont_see_in_database(TABLE, &products_attributes).unwrap();
}
