//! Spacemarks server-side database layer.
//!
//! Provides SQLite connection management and schema migrations for the
//! relational store backing the sync API.
//!
//! # Usage
//!
//! ```no_run
//! use spacemarks::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("spacemarks.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
