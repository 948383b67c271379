//! Persistence boundary for the schedule pipeline.
//!
//! The pipeline only sees [`ScheduleStore`] and [`Repository`]; the
//! [`InMemoryStore`] here backs the CLI and the tests.

mod error;
mod memory;
mod repository;

pub use error::{Result, StoreError};
pub use memory::{InMemoryStore, Table};
pub use repository::{Repository, ScheduleStore};
