// comanda-client/examples/customize_and_submit.rs
// Offline walk-through of a customization session against the in-memory
// catalog and gateway.

use comanda_client::{CatalogSource, OrderGateway, RecordingGateway, StaticCatalog};
use comanda_core::{
    CombinationGroup, CombinationOption, OrderSubmission, SelectionMode, SelectionSession,
    project, validate_submission,
};
use rust_decimal::Decimal;

fn tapioca_groups() -> Vec<CombinationGroup> {
    let queijos = CombinationGroup {
        id: "queijos".to_string(),
        name: "Queijos".to_string(),
        description: Some("Escolha até 2".to_string()),
        selection_mode: SelectionMode::Multiple,
        min_selections: 0,
        max_selections: Some(2),
        is_required: false,
        is_active: true,
        display_order: 0,
        options: vec![
            CombinationOption {
                id: "mussarela".to_string(),
                group_id: "queijos".to_string(),
                name: "Mussarela".to_string(),
                emoji: Some("🧀".to_string()),
                description: None,
                additional_price: Decimal::new(100, 2),
                is_active: true,
                display_order: 0,
            },
            CombinationOption {
                id: "coalho".to_string(),
                group_id: "queijos".to_string(),
                name: "Coalho".to_string(),
                emoji: None,
                description: None,
                additional_price: Decimal::new(200, 2),
                is_active: true,
                display_order: 1,
            },
        ],
    };
    vec![queijos]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let catalog = StaticCatalog::new().with_item("tapioca", tapioca_groups());
    let gateway = RecordingGateway::new();

    let groups = catalog.fetch_combination_groups("tapioca").await?;
    let mut session = SelectionSession::new(groups);

    session.toggle_multiple("queijos", "mussarela")?;
    session.toggle_multiple("queijos", "coalho")?;
    validate_submission(&session)?;

    let summary = project(&session);
    tracing::info!(
        lines = summary.lines.len(),
        total = %summary.additional_total,
        "selection projected"
    );

    let submission = OrderSubmission::from_summary(
        "tapioca",
        "Ana",
        "Mesa 4",
        Some("sem cebola".to_string()),
        summary,
    );
    let receipt = gateway.submit_order(&submission).await?;
    tracing::info!(
        order_id = %receipt.order_id,
        order_number = receipt.order_number,
        "order created"
    );

    Ok(())
}
