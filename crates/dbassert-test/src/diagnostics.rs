//! Failure report formatting
//!
//! A report shows a bounded sample of rows as pretty-printed JSON (2-space
//! indent, columns in table order) and says how many rows were left out.

use dbassert_query::Row;

/// Report used when no rows came back for display
pub const EMPTY_TABLE: &str = "The table is empty.";

/// Describe a sample of rows for a failure report
///
/// `total` is the number of rows known to exist, if the caller counted them;
/// the sample length is used when it is larger. At most `limit` rows are
/// rendered. An empty sample always yields [`EMPTY_TABLE`], even when `total`
/// is positive.
///
/// # Examples
///
/// ```
/// use dbassert_query::row_from_value;
/// use dbassert_test::diagnostics::describe_sample;
/// use serde_json::json;
///
/// let rows = vec![row_from_value(json!({"title": "Forge"})).unwrap()];
/// assert_eq!(
///     describe_sample(1, &rows, 3),
///     "Found: [\n  {\n    \"title\": \"Forge\"\n  }\n]"
/// );
/// assert_eq!(describe_sample(0, &[], 3), "The table is empty.");
/// ```
pub fn describe_sample(total: u64, rows: &[Row], limit: usize) -> String {
	if rows.is_empty() {
		return EMPTY_TABLE.to_string();
	}

	let shown = &rows[..rows.len().min(limit)];
	let mut description = format!("Found: {}", pretty_json(shown));

	let total = total.max(rows.len() as u64);
	let limit = limit as u64;
	if total > limit {
		description.push_str(&format!(" and {} others.", total - limit));
	}
	description
}

/// Pretty-print rows as a JSON array
pub fn pretty_json(rows: &[Row]) -> String {
	serde_json::to_string_pretty(rows)
		.unwrap_or_else(|e| format!("<rows could not be rendered: {}>", e))
}
