//! Storage backend implementations.
//!
//! This module provides the SQLite implementation of the
//! `inkpress_core::storage::PostRepository` trait. Handlers only see the
//! trait object held in `AppState`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
