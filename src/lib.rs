//! In-memory expense tracking: a record store plus pure aggregation over its snapshots.
//!
//! The terminal binary in `main.rs` is one consumer of this library; nothing here touches
//! the terminal, the filesystem or the system clock.

pub mod error;
pub mod models;
pub mod store;
pub mod summary;

pub use error::{Error, Result, ValidationError};
pub use models::{Category, CategorySummary, Expense, ExpenseId, ExpenseInput, MAX_AMOUNT};
pub use store::ExpenseStore;
pub use summary::Overview;
