//! Gradebook-State: record store for the gradebook
//!
//! This crate owns every piece of student data for the lifetime of a
//! gradebook session. Nothing is written to disk; the store is dropped with
//! the process.
//!
//! ## Layer 0 - Data
//!
//! Focus: record integrity. A stored average always matches its grades and a
//! full name is never stored twice.
//!
//! ## Key Components
//!
//! - `Grade`: an integer grade in the closed range 1..=5
//! - `StudentRecord`: full name, ordered grades and their average
//! - `StudentStore`: the store contract
//! - `MemoryStudentStore`: `HashMap`-backed implementation

mod error;
pub mod memory;
mod schema;
pub mod storage_traits;

pub use error::StorageError;
pub use memory::MemoryStudentStore;
pub use schema::{average, Grade, StudentRecord};
pub use storage_traits::{StorageResult, StudentStore};
