//! Domain core for the Comanda customer hub
//!
//! Order-customization model used by the customer-facing digital menu:
//! combination catalog types, the per-session selection engine, the
//! price/summary projector, and the submission payload handed to the
//! order gateway. Everything here is synchronous, in-memory, and free
//! of I/O.

pub mod catalog;
pub mod error;
pub mod order;
pub mod selection;

// Re-exports
pub use catalog::{CombinationGroup, CombinationOption, SelectionMode, normalize_catalog};
pub use error::{SelectionError, SelectionResult, ValidationError};
pub use order::{OrderReceipt, OrderSubmission};
pub use selection::{
    OrderSelectionLine, SelectionSession, SelectionState, SelectionSummary, project,
    validate_submission,
};
