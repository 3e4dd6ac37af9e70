//! Selection session - the engine holding per-group state
//!
//! One session per item being customized. The caller (checkout flow)
//! owns the session and threads it through engine calls; nothing here
//! touches the network. Submission leaves the state untouched, so a
//! failed submit can be retried without re-entering selections.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::SelectionState;
use crate::catalog::{CombinationGroup, SelectionMode};
use crate::error::{SelectionError, SelectionResult};

/// Per-option quantity cap for quantity-mode groups
pub const DEFAULT_MAX_PER_OPTION: u32 = 10;

/// Selection engine state for one customization session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionSession {
    /// Catalog snapshot, in display order (see `normalize_catalog`)
    groups: Vec<CombinationGroup>,
    /// One state per group, keyed by group id
    states: HashMap<String, SelectionState>,
    /// Per-option cap for quantity groups
    max_per_option: u32,
}

impl SelectionSession {
    /// Create a session with an empty state per group, shaped by each
    /// group's selection mode.
    pub fn new(groups: Vec<CombinationGroup>) -> Self {
        let states = Self::empty_states(&groups);
        Self {
            groups,
            states,
            max_per_option: DEFAULT_MAX_PER_OPTION,
        }
    }

    /// Override the per-option quantity cap
    pub fn with_max_per_option(mut self, max_per_option: u32) -> Self {
        self.max_per_option = max_per_option;
        self
    }

    /// Reset every group to its empty state.
    ///
    /// Equivalent to building a fresh session over the same catalog.
    pub fn reset(&mut self) {
        self.states = Self::empty_states(&self.groups);
    }

    fn empty_states(groups: &[CombinationGroup]) -> HashMap<String, SelectionState> {
        groups
            .iter()
            .map(|g| (g.id.clone(), SelectionState::empty_for(g.selection_mode)))
            .collect()
    }

    /// Catalog snapshot this session runs against
    pub fn groups(&self) -> &[CombinationGroup] {
        &self.groups
    }

    /// Current state for a group, if the group exists
    pub fn state(&self, group_id: &str) -> Option<&SelectionState> {
        self.states.get(group_id)
    }

    /// Per-option quantity cap in effect
    pub fn max_per_option(&self) -> u32 {
        self.max_per_option
    }

    /// Toggle an option in a multiple-selection group.
    ///
    /// Removing is always allowed. Adding past the group's effective
    /// max is a silent no-op: the cap is a UI guardrail, not a failure
    /// worth surfacing.
    pub fn toggle_multiple(&mut self, group_id: &str, option_id: &str) -> SelectionResult<()> {
        let max = self.require_option(group_id, option_id)?.effective_max();
        let state = self.require_state_mut(group_id)?;
        let SelectionState::Multiple { selected } = state else {
            return Err(SelectionError::ModeMismatch {
                group: group_id.to_string(),
                expected: SelectionMode::Multiple,
                actual: state.mode(),
            });
        };

        if selected.remove(option_id) {
            debug!(group = group_id, option = option_id, "option deselected");
        } else if max.is_none_or(|m| (selected.len() as u32) < m) {
            selected.insert(option_id.to_string());
            debug!(group = group_id, option = option_id, "option selected");
        } else {
            debug!(
                group = group_id,
                option = option_id,
                "selection cap reached, toggle ignored"
            );
        }
        Ok(())
    }

    /// Adjust the quantity of an option in a quantity-mode group.
    ///
    /// The new quantity is clamped to `[0, max_per_option]`; a result
    /// of 0 removes the entry, so selected count and map size stay
    /// consistent.
    pub fn change_quantity(
        &mut self,
        group_id: &str,
        option_id: &str,
        delta: i32,
    ) -> SelectionResult<()> {
        self.require_option(group_id, option_id)?;
        let cap = self.max_per_option;
        let state = self.require_state_mut(group_id)?;
        let SelectionState::Quantity { quantities } = state else {
            return Err(SelectionError::ModeMismatch {
                group: group_id.to_string(),
                expected: SelectionMode::Quantity,
                actual: state.mode(),
            });
        };

        let current = quantities.get(option_id).copied().unwrap_or(0) as i64;
        let next = (current + i64::from(delta)).clamp(0, i64::from(cap)) as u32;
        if next == 0 {
            quantities.remove(option_id);
        } else {
            quantities.insert(option_id.to_string(), next);
        }
        debug!(
            group = group_id,
            option = option_id,
            quantity = next,
            "quantity changed"
        );
        Ok(())
    }

    /// Choose an option in a single-selection group, replacing any
    /// previous choice. Cardinality is fixed at 1, so no capacity check.
    pub fn select_single(&mut self, group_id: &str, option_id: &str) -> SelectionResult<()> {
        self.require_option(group_id, option_id)?;
        let state = self.require_state_mut(group_id)?;
        let SelectionState::Single { selected } = state else {
            return Err(SelectionError::ModeMismatch {
                group: group_id.to_string(),
                expected: SelectionMode::Single,
                actual: state.mode(),
            });
        };

        *selected = Some(option_id.to_string());
        debug!(group = group_id, option = option_id, "option selected");
        Ok(())
    }

    /// Selected count for a group (0 when the group is unknown)
    pub fn count_selected(&self, group_id: &str) -> u32 {
        self.states
            .get(group_id)
            .map(SelectionState::count)
            .unwrap_or(0)
    }

    /// Total selections across all groups, used to badge the confirm
    /// action.
    pub fn total_selected(&self) -> u32 {
        self.groups.iter().map(|g| self.count_selected(&g.id)).sum()
    }

    /// Install a state produced outside the engine (e.g., a saved draft).
    ///
    /// The state's shape must match the group's selection mode; its
    /// contents are not re-checked here, which is why
    /// `validate_submission` re-verifies every cap before submit.
    pub fn restore_state(&mut self, group_id: &str, state: SelectionState) -> SelectionResult<()> {
        let mode = self.require_group(group_id)?.selection_mode;
        if state.mode() != mode {
            return Err(SelectionError::ModeMismatch {
                group: group_id.to_string(),
                expected: mode,
                actual: state.mode(),
            });
        }
        self.states.insert(group_id.to_string(), state);
        Ok(())
    }

    fn require_group(&self, group_id: &str) -> SelectionResult<&CombinationGroup> {
        self.groups
            .iter()
            .find(|g| g.id == group_id)
            .ok_or_else(|| SelectionError::UnknownGroup(group_id.to_string()))
    }

    fn require_option(&self, group_id: &str, option_id: &str) -> SelectionResult<&CombinationGroup> {
        let group = self.require_group(group_id)?;
        if group.find_option(option_id).is_none() {
            return Err(SelectionError::UnknownOption {
                group: group_id.to_string(),
                option: option_id.to_string(),
            });
        }
        Ok(group)
    }

    fn require_state_mut(&mut self, group_id: &str) -> SelectionResult<&mut SelectionState> {
        self.states
            .get_mut(group_id)
            .ok_or_else(|| SelectionError::UnknownGroup(group_id.to_string()))
    }
}
