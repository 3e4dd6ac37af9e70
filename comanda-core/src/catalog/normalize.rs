//! Catalog normalization
//!
//! The backend contract already filters to active rows and orders by
//! display order; this pass re-applies both so the engine, projector,
//! and validator can rely on them even when a payload came from a cache
//! or a saved draft.

use super::CombinationGroup;

/// Drop inactive groups/options and sort everything by display order.
///
/// Sorting is stable with the id as tie-break, so equal display orders
/// still project deterministically.
pub fn normalize_catalog(mut groups: Vec<CombinationGroup>) -> Vec<CombinationGroup> {
    groups.retain(|g| g.is_active);
    for group in &mut groups {
        group.options.retain(|o| o.is_active);
        group.options.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.id.cmp(&b.id))
        });
    }
    groups.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.id.cmp(&b.id))
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CombinationOption, SelectionMode};
    use rust_decimal::Decimal;

    fn create_option(id: &str, display_order: i32, is_active: bool) -> CombinationOption {
        CombinationOption {
            id: id.to_string(),
            group_id: "grp-1".to_string(),
            name: id.to_uppercase(),
            emoji: None,
            description: None,
            additional_price: Decimal::ZERO,
            is_active,
            display_order,
        }
    }

    fn create_group(id: &str, display_order: i32, is_active: bool) -> CombinationGroup {
        CombinationGroup {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            selection_mode: SelectionMode::Multiple,
            min_selections: 0,
            max_selections: None,
            is_required: false,
            is_active,
            display_order,
            options: vec![],
        }
    }

    #[test]
    fn test_inactive_groups_and_options_are_dropped() {
        let mut group = create_group("grp-1", 0, true);
        group.options = vec![
            create_option("opt-a", 0, true),
            create_option("opt-b", 1, false),
        ];
        let groups = normalize_catalog(vec![group, create_group("grp-2", 1, false)]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "grp-1");
        assert_eq!(groups[0].options.len(), 1);
        assert_eq!(groups[0].options[0].id, "opt-a");
    }

    #[test]
    fn test_sorted_by_display_order_with_id_tiebreak() {
        let mut first = create_group("grp-b", 2, true);
        first.options = vec![
            create_option("opt-z", 1, true),
            create_option("opt-a", 0, true),
        ];
        let second = create_group("grp-a", 2, true);
        let third = create_group("grp-c", 1, true);

        let groups = normalize_catalog(vec![first, second, third]);

        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["grp-c", "grp-a", "grp-b"]);
        let option_ids: Vec<&str> = groups[2].options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(option_ids, vec!["opt-a", "opt-z"]);
    }
}
