//! Task management module
//!
//! - Task value type and its `description;due_date;status` record format
//! - TaskStore: ordered list persisted to a flat file

pub mod error;
pub mod model;
pub mod store;

pub use error::{Result, TaskError};
pub use model::Task;
pub use store::TaskStore;
