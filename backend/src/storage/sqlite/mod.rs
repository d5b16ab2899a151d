//! # SQLite Storage Module
//!
//! Alternative storage backend keeping all four store slots in a single
//! SQLite database. Each slot is one row in a key-value table holding the
//! same JSON document the file backend would write, so the two backends
//! stay interchangeable behind the storage traits.

pub mod db;

pub use db::DbConnection;
