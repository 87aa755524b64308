//! Form Store - Snapshot persistence
//!
//! The engine only produces snapshots; this crate is the persistence side.
//! It turns templates into the snapshot JSON and back (validating what it
//! reads), and writes and reads snapshot files.

mod error;
mod serializer;
mod file_io;

pub use error::*;
pub use serializer::*;
pub use file_io::*;
