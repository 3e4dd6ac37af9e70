//! End-to-end customization flow
//!
//! Walks the whole path a customer takes on the digital menu: fetch a
//! catalog, pick options across mixed-mode groups, fail validation on a
//! missing required group, complete it, project, and build the
//! submission payload.

use comanda_core::{
    CombinationGroup, CombinationOption, OrderSubmission, SelectionMode, SelectionSession,
    ValidationError, normalize_catalog, project, validate_submission,
};
use rust_decimal::Decimal;

fn option(group_id: &str, id: &str, name: &str, price_cents: i64, order: i32) -> CombinationOption {
    CombinationOption {
        id: id.to_string(),
        group_id: group_id.to_string(),
        name: name.to_string(),
        emoji: None,
        description: None,
        additional_price: Decimal::new(price_cents, 2),
        is_active: true,
        display_order: order,
    }
}

/// A "Tapioca" with a required base, optional cheeses capped at 2, one
/// protein, and a sauce counter.
fn tapioca_catalog() -> Vec<CombinationGroup> {
    normalize_catalog(vec![
        CombinationGroup {
            id: "base".to_string(),
            name: "Base".to_string(),
            description: None,
            selection_mode: SelectionMode::Single,
            min_selections: 1,
            max_selections: None,
            is_required: true,
            is_active: true,
            display_order: 0,
            options: vec![
                option("base", "tradicional", "Tradicional", 0, 0),
                option("base", "integral", "Integral", 100, 1),
            ],
        },
        CombinationGroup {
            id: "queijos".to_string(),
            name: "Queijos".to_string(),
            description: None,
            selection_mode: SelectionMode::Multiple,
            min_selections: 0,
            max_selections: Some(2),
            is_required: false,
            is_active: true,
            display_order: 1,
            options: vec![
                option("queijos", "mussarela", "Mussarela", 100, 0),
                option("queijos", "coalho", "Coalho", 200, 1),
                option("queijos", "catupiry", "Catupiry", 300, 2),
            ],
        },
        CombinationGroup {
            id: "molhos".to_string(),
            name: "Molhos".to_string(),
            description: None,
            selection_mode: SelectionMode::Quantity,
            min_selections: 0,
            max_selections: None,
            is_required: false,
            is_active: true,
            display_order: 2,
            options: vec![option("molhos", "especial", "Especial", 50, 0)],
        },
    ])
}

#[test]
fn customer_customizes_and_builds_a_submission() {
    let mut session = SelectionSession::new(tapioca_catalog());

    // Cheeses: third toggle exceeds the cap of 2 and is ignored
    session.toggle_multiple("queijos", "mussarela").unwrap();
    session.toggle_multiple("queijos", "coalho").unwrap();
    session.toggle_multiple("queijos", "catupiry").unwrap();
    assert_eq!(session.count_selected("queijos"), 2);

    // Sauce counter: +3 then -1
    for _ in 0..3 {
        session.change_quantity("molhos", "especial", 1).unwrap();
    }
    session.change_quantity("molhos", "especial", -1).unwrap();

    // Required base still missing: submission is blocked by name
    assert_eq!(
        validate_submission(&session),
        Err(ValidationError::MissingRequired {
            group: "Base".to_string(),
            required: 1,
        })
    );

    session.select_single("base", "integral").unwrap();
    validate_submission(&session).unwrap();
    assert_eq!(session.total_selected(), 5);

    let summary = project(&session);
    let ids: Vec<&str> = summary
        .lines
        .iter()
        .map(|l| l.option_id.as_str())
        .collect();
    assert_eq!(ids, vec!["integral", "mussarela", "coalho", "especial"]);
    // 1.00 + 1.00 + 2.00 + 2 * 0.50
    assert_eq!(summary.additional_total, Decimal::new(500, 2));

    let submission = OrderSubmission::from_summary(
        "tapioca",
        "Ana",
        "Mesa 4",
        None,
        summary,
    );
    submission.validate().unwrap();
    assert_eq!(submission.lines.len(), 4);
    assert_eq!(submission.additional_total, Decimal::new(500, 2));
}

#[test]
fn switching_the_single_base_replaces_the_previous_choice() {
    let mut session = SelectionSession::new(tapioca_catalog());

    session.select_single("base", "tradicional").unwrap();
    session.select_single("base", "integral").unwrap();

    let summary = project(&session);
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].option_id, "integral");
    assert_eq!(summary.additional_total, Decimal::new(100, 2));
}

#[test]
fn failed_submission_leaves_the_session_ready_for_retry() {
    let mut session = SelectionSession::new(tapioca_catalog());
    session.select_single("base", "tradicional").unwrap();
    session.toggle_multiple("queijos", "coalho").unwrap();

    let before = session.clone();
    // The gateway call fails out-of-band; nothing here mutated the
    // session, so projecting again yields the same payload.
    let first = project(&session);
    let retry = project(&session);

    assert_eq!(session, before);
    assert_eq!(first, retry);
}
