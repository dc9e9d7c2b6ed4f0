//! Backends implementing the connection capabilities

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::{MemoryConnection, MemoryQuery};
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteConnection, SqliteQuery};
