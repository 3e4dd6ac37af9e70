//! Per-group selection state

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::SelectionMode;

/// In-progress selection for one combination group.
///
/// The shape follows the group's selection mode so each mode's
/// invariants hold by construction: single keeps at most one id,
/// multiple keeps a set, quantity keeps positive counts only (a
/// quantity of 0 removes the entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SelectionState {
    Single {
        #[serde(skip_serializing_if = "Option::is_none")]
        selected: Option<String>,
    },
    Multiple {
        selected: HashSet<String>,
    },
    Quantity {
        quantities: HashMap<String, u32>,
    },
}

impl SelectionState {
    /// Empty state shaped for the given mode
    pub fn empty_for(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single { selected: None },
            SelectionMode::Multiple => Self::Multiple {
                selected: HashSet::new(),
            },
            SelectionMode::Quantity => Self::Quantity {
                quantities: HashMap::new(),
            },
        }
    }

    /// The mode this state is shaped for
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single { .. } => SelectionMode::Single,
            Self::Multiple { .. } => SelectionMode::Multiple,
            Self::Quantity { .. } => SelectionMode::Quantity,
        }
    }

    /// Selected count: single = 0 or 1, multiple = set size, quantity =
    /// sum of all quantities.
    pub fn count(&self) -> u32 {
        match self {
            Self::Single { selected } => selected.is_some() as u32,
            Self::Multiple { selected } => selected.len() as u32,
            Self::Quantity { quantities } => quantities.values().sum(),
        }
    }

    /// Whether the given option participates in this state
    pub fn contains(&self, option_id: &str) -> bool {
        match self {
            Self::Single { selected } => selected.as_deref() == Some(option_id),
            Self::Multiple { selected } => selected.contains(option_id),
            Self::Quantity { quantities } => quantities.contains_key(option_id),
        }
    }

    /// Quantity for the given option (1 for chosen single/multiple entries)
    pub fn quantity_of(&self, option_id: &str) -> u32 {
        match self {
            Self::Quantity { quantities } => quantities.get(option_id).copied().unwrap_or(0),
            _ => self.contains(option_id) as u32,
        }
    }
}
