//! Append-only SQLite store for volume snapshots and totals.

pub mod db;

pub use db::{Database, DbError};
