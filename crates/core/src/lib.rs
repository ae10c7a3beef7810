//! Core data types for the volume watcher.

pub mod exchange;
pub mod record;
pub mod snapshot;

pub use exchange::*;
pub use record::*;
pub use snapshot::*;
