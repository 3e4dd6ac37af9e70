//! Pre-submission constraint validation

use tracing::debug;

use super::session::SelectionSession;
use crate::error::ValidationError;

/// Check that the current configuration is submittable.
///
/// Required groups must reach `max(min_selections, 1)` choices; the
/// first unsatisfied group in display order is reported by name. The
/// cap check then runs for every group even though the engine guards it
/// during editing, since a state restored from a draft never went
/// through the engine.
pub fn validate_submission(session: &SelectionSession) -> Result<(), ValidationError> {
    for group in session.groups().iter().filter(|g| g.is_required) {
        let required = group.min_selections.max(1);
        let selected = session.count_selected(&group.id);
        if selected < required {
            return Err(ValidationError::MissingRequired {
                group: group.name.clone(),
                required,
            });
        }
    }

    for group in session.groups() {
        let selected = session.count_selected(&group.id);
        if let Some(max) = group.effective_max()
            && selected > max
        {
            return Err(ValidationError::TooManySelected {
                group: group.name.clone(),
                selected,
                max,
            });
        }
    }

    debug!(total = session.total_selected(), "selection validated");
    Ok(())
}
