//! # dbassert-test
//!
//! Database assertions for tests.
//!
//! ## Overview
//!
//! [`DatabaseAssertions`] answers "does a row matching these attributes exist
//! in this table" against any [`Connection`](dbassert_query::Connection), and
//! explains failures with a sample of what the table actually contains.
//!
//! ## Features
//!
//! - **[`DatabaseAssertions`]**: `see_in_database`, `dont_see_in_database`,
//!   `assert_database_count` and friends, returning [`Result`]
//! - **Macros**: [`assert_see_in_database!`], [`assert_dont_see_in_database!`],
//!   [`assert_database_count!`] panic with the failure report
//! - **[`fixtures`]**: scripted connection doubles and rstest fixtures
//! - **[`AssertionSettings`]**: sample size, loadable from TOML
//!
//! ## Quick Start
//!
//! ```
//! use dbassert_query::{MemoryConnection, attributes};
//! use dbassert_test::DatabaseAssertions;
//! use serde_json::json;
//!
//! let connection = MemoryConnection::new();
//! connection.insert("products", json!({"title": "Forge"})).unwrap();
//!
//! let db = DatabaseAssertions::new(connection);
//! let err = db
//!     .see_in_database("products", &attributes! { "title" => "Spark" })
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Unable to find row in database table [products] that matched attributes [{\"title\":\"Spark\"}].\n\n\
//!      Found: [\n  {\n    \"title\": \"Forge\"\n  }\n]"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`database`]: the assertion helper
//! - [`diagnostics`]: failure report formatting
//! - [`fixtures`]: test doubles
//! - [`logging`]: test logging setup
//! - [`settings`]: helper settings

pub mod database;
pub mod diagnostics;
pub mod error;
pub mod fixtures;
pub mod logging;
mod macros;
pub mod settings;

pub use database::DatabaseAssertions;
pub use diagnostics::{EMPTY_TABLE, describe_sample};
pub use error::{AssertionError, Result};
pub use settings::{AssertionSettings, DEFAULT_SAMPLE_SIZE};
