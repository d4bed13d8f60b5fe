//! In-memory collaborators.
//!
//! `MemoryTable` executes query shapes the way a SQL engine would, which
//! makes it usable both by small hosts and by the engine's own tests.

mod memory;
mod row;

pub use memory::MemoryTable;
pub use row::Row;
