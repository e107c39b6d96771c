//! Display formatting for domain models and operation results.
//!
//! Domain models carry their own Display implementations producing
//! markdown, collection newtypes add empty-collection handling, and
//! result wrappers format the outcome of mutating operations. All
//! output is markdown so interfaces can render it richly or print it
//! as plain text.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Collection wrapper types (StrategyItems, WeekTasks)
//! - [`results`]: Operation result types (GenerateSummary, SaveSummary)

pub mod collections;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{StrategyItems, WeekTasks};
pub use results::{GenerateSummary, SaveSummary};
