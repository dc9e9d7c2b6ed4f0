//! # dbassert-query
//!
//! Read-only connection capabilities for the dbassert helpers.
//!
//! ## Overview
//!
//! The assertion helpers never talk to a driver directly. They go through two
//! small traits:
//!
//! - **[`Connection`]**: hands out a query per table
//! - **[`QueryBuilder`]**: `filter`, `take`, `count`, `get`
//!
//! Two backends are provided:
//!
//! - **[`MemoryConnection`]**: tables held in memory, for unit tests and doubles
//! - **`SqliteConnection`**: `rusqlite`-backed (requires the `sqlite` feature)
//!
//! ## Quick Start
//!
//! ```
//! use dbassert_query::{Connection, MemoryConnection, QueryBuilder, attributes};
//! use serde_json::json;
//!
//! let connection = MemoryConnection::new();
//! connection.insert("products", json!({"title": "Spark"})).unwrap();
//!
//! let query = connection.table("products").filter(&attributes! { "title" => "Spark" });
//! assert_eq!(query.count().unwrap(), 1);
//! ```

pub mod backends;
pub mod connection;
pub mod error;
pub mod registry;
pub mod types;

pub use backends::{MemoryConnection, MemoryQuery};
#[cfg(feature = "sqlite")]
pub use backends::{SqliteConnection, SqliteQuery};
pub use connection::{Connection, QueryBuilder};
pub use error::{ConnectionError, Result};
pub use registry::{ConnectionRegistry, DEFAULT_CONNECTION};
pub use types::{AttributeSet, Row, row_from_value, scalar_eq};
