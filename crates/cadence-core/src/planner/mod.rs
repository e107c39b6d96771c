//! High-level planner API for the annual calendar and weekly tasks.
//!
//! The [`Planner`] is the imperative shell around the pure core: it owns
//! the database path, sequences persistence calls, and serializes
//! reconciliation passes so that no two in-flight saves race on a week's
//! task set. All calendar/diff logic itself lives in the pure modules
//! ([`crate::expansion`], [`crate::reconcile`], [`crate::days`]).
//!
//! ## Submodules
//!
//! - [`builder`]: factory for creating [`Planner`] instances
//! - [`ops`]: low-level database operations wrapped in blocking tasks
//! - [`handlers`]: high-level flows (generate, save, add, move, complete)

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::reconcile::{IdGenerator, UuidGenerator};

pub mod builder;
pub mod handlers;
pub mod ops;


// Re-export the main types
pub use builder::PlannerBuilder;
pub use handlers::{GenerateOutcome, ReconcileReport, WeekOverview};

/// Main planner interface for the annual calendar and weekly tasks.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) ids: Arc<dyn IdGenerator>,
    /// Serializes reconciliation so saves never overlap on a week.
    pub(crate) reconcile_gate: Mutex<()>,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self::with_id_generator(db_path, Arc::new(UuidGenerator))
    }

    /// Creates a planner with a custom identifier generator.
    pub(crate) fn with_id_generator(db_path: PathBuf, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            db_path,
            ids,
            reconcile_gate: Mutex::new(()),
        }
    }
}
