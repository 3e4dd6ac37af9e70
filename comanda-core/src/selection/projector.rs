//! Price/summary projection
//!
//! Pure derivation from session state to the immutable line items sent
//! with an order. Output order follows the catalog (groups first, then
//! each group's option display order), never insertion order, so the
//! same state and catalog always produce the same sequence and total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::session::SelectionSession;
use super::state::SelectionState;
use crate::catalog::CombinationOption;

/// One chosen option, snapshotted for checkout and kitchen display.
///
/// Name and unit price are copied from the catalog at projection time,
/// so a later catalog edit cannot change an already-submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSelectionLine {
    pub option_id: String,
    pub option_name: String,
    pub quantity: u32,
    /// Surcharge per unit at projection time
    pub additional_price: Decimal,
}

impl OrderSelectionLine {
    /// Line surcharge: unit price times quantity
    pub fn line_total(&self) -> Decimal {
        self.additional_price * Decimal::from(self.quantity)
    }
}

/// Projection result: lines in catalog order plus the aggregate surcharge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SelectionSummary {
    pub lines: Vec<OrderSelectionLine>,
    pub additional_total: Decimal,
}

/// Project the session's state against its catalog.
///
/// Options referenced by the state but missing from the catalog were
/// deactivated mid-session; they are dropped silently rather than
/// failing the projection - from the customer's perspective the option
/// simply wasn't available.
pub fn project(session: &SelectionSession) -> SelectionSummary {
    let mut lines = Vec::new();

    for group in session.groups() {
        let Some(state) = session.state(&group.id) else {
            continue;
        };
        match state {
            SelectionState::Single { selected } => {
                if let Some(option_id) = selected {
                    match group.find_option(option_id) {
                        Some(option) => lines.push(line_for(option, 1)),
                        None => stale(&group.id, option_id),
                    }
                }
            }
            SelectionState::Multiple { selected } => {
                for option in &group.options {
                    if selected.contains(&option.id) {
                        lines.push(line_for(option, 1));
                    }
                }
                for option_id in selected {
                    if group.find_option(option_id).is_none() {
                        stale(&group.id, option_id);
                    }
                }
            }
            SelectionState::Quantity { quantities } => {
                for option in &group.options {
                    if let Some(&quantity) = quantities.get(&option.id)
                        && quantity > 0
                    {
                        lines.push(line_for(option, quantity));
                    }
                }
                for option_id in quantities.keys() {
                    if group.find_option(option_id).is_none() {
                        stale(&group.id, option_id);
                    }
                }
            }
        }
    }

    let additional_total = lines.iter().map(OrderSelectionLine::line_total).sum();
    SelectionSummary {
        lines,
        additional_total,
    }
}

fn line_for(option: &CombinationOption, quantity: u32) -> OrderSelectionLine {
    OrderSelectionLine {
        option_id: option.id.clone(),
        option_name: option.name.clone(),
        quantity,
        additional_price: option.additional_price,
    }
}

fn stale(group_id: &str, option_id: &str) {
    warn!(
        group = group_id,
        option = option_id,
        "option no longer in catalog, dropped from projection"
    );
}
