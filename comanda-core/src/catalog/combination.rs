//! Combination group and option models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selection mode: how many of a group's options may be chosen and
/// whether repetition (quantity) is meaningful.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one option
    #[default]
    Single,
    /// A set of options, bounded by `max_selections`
    Multiple,
    /// Per-option positive quantities
    Quantity,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
            Self::Quantity => "quantity",
        };
        write!(f, "{label}")
    }
}

/// Combination option (embedded in CombinationGroup)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombinationOption {
    pub id: String,
    /// Owning group reference
    pub group_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Surcharge per unit in currency units (e.g., 2.50), never negative
    pub additional_price: Decimal,
    pub is_active: bool,
    pub display_order: i32,
}

/// One axis of customization for a base item (e.g., "Queijos")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombinationGroup {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub selection_mode: SelectionMode,
    pub min_selections: u32,
    /// None = unbounded (ignored for single mode, see `effective_max`)
    pub max_selections: Option<u32>,
    pub is_required: bool,
    pub is_active: bool,
    pub display_order: i32,
    /// Embedded options, in display order
    pub options: Vec<CombinationOption>,
}

impl CombinationGroup {
    /// Effective selection cap for this group.
    ///
    /// Single mode is always exactly 1 regardless of the stored
    /// `max_selections`; other modes use the stored value.
    pub fn effective_max(&self) -> Option<u32> {
        match self.selection_mode {
            SelectionMode::Single => Some(1),
            _ => self.max_selections,
        }
    }

    /// Look up an option by id
    pub fn find_option(&self, option_id: &str) -> Option<&CombinationOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Options still offered to new orders
    pub fn active_options(&self) -> impl Iterator<Item = &CombinationOption> {
        self.options.iter().filter(|o| o.is_active)
    }
}
