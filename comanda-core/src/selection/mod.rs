//! Selection engine for order customization
//!
//! One `SelectionSession` per item being customized. The session owns a
//! catalog snapshot plus per-group state; the projector derives the
//! immutable line items sent with the order, and the validator gates
//! submission on the groups' cardinality rules.

pub mod projector;
pub mod session;
pub mod state;
pub mod validator;

pub use projector::{OrderSelectionLine, SelectionSummary, project};
pub use session::{DEFAULT_MAX_PER_OPTION, SelectionSession};
pub use state::SelectionState;
pub use validator::validate_submission;
