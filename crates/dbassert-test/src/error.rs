//! Assertion error types

use dbassert_query::ConnectionError;

/// Result type for database assertions
pub type Result<T> = std::result::Result<T, AssertionError>;

/// Failure of a database assertion
#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
	/// The database did not satisfy the assertion; carries the full report
	#[error("{0}")]
	AssertionFailed(String),

	/// The check could not run because a query failed
	#[error(transparent)]
	Connection(#[from] ConnectionError),

	/// Rejected helper settings
	#[error("Invalid assertion settings: {0}")]
	Settings(String),
}

impl AssertionError {
	pub fn is_assertion_failure(&self) -> bool {
		matches!(self, AssertionError::AssertionFailed(_))
	}

	/// Report text of an assertion failure
	pub fn failure_message(&self) -> Option<&str> {
		match self {
			AssertionError::AssertionFailed(message) => Some(message),
			_ => None,
		}
	}
}
