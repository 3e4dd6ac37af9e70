//! Catalog access
//!
//! One fetch per customization session. Caching and refetch policy stay
//! with the caller; implementations only normalize the payload (active
//! rows, display order) before it reaches the selection engine.

use std::collections::HashMap;

use async_trait::async_trait;
use comanda_core::catalog::{CombinationGroup, normalize_catalog};
use tracing::info;

use crate::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpClient;

/// Read side of the customization catalog.
///
/// Returns an empty vec when the item has no customization.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_combination_groups(
        &self,
        item_id: &str,
    ) -> ClientResult<Vec<CombinationGroup>>;
}

/// REST-backed catalog source
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: HttpClient,
}

impl HttpCatalogClient {
    /// Create a new catalog client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_combination_groups(
        &self,
        item_id: &str,
    ) -> ClientResult<Vec<CombinationGroup>> {
        let raw: Vec<CombinationGroup> = self
            .http
            .get(&format!("api/items/{item_id}/combination-groups"))
            .await?;
        let groups = normalize_catalog(raw);
        info!(
            item = item_id,
            groups = groups.len(),
            "fetched combination catalog"
        );
        Ok(groups)
    }
}

/// Fixed in-memory catalog for tests and offline demos
#[derive(Debug, Default)]
pub struct StaticCatalog {
    items: HashMap<String, Vec<CombinationGroup>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the groups served for an item
    pub fn with_item(
        mut self,
        item_id: impl Into<String>,
        groups: Vec<CombinationGroup>,
    ) -> Self {
        self.items.insert(item_id.into(), groups);
        self
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_combination_groups(
        &self,
        item_id: &str,
    ) -> ClientResult<Vec<CombinationGroup>> {
        Ok(normalize_catalog(
            self.items.get(item_id).cloned().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::catalog::{CombinationOption, SelectionMode};
    use rust_decimal::Decimal;

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
            options: vec![CombinationOption {
                id: format!("{id}-opt"),
                group_id: id.to_string(),
                name: "Opt".to_string(),
                emoji: None,
                description: None,
                additional_price: Decimal::ZERO,
                is_active: true,
                display_order: 0,
            }],
        }
    }

    #[tokio::test]
    async fn test_static_catalog_normalizes_payload() {
        let catalog = StaticCatalog::new().with_item(
            "tapioca",
            vec![
                create_group("grp-b", 1, true),
                create_group("grp-a", 0, true),
                create_group("grp-c", 2, false),
            ],
        );

        let groups = catalog.fetch_combination_groups("tapioca").await.unwrap();

        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["grp-a", "grp-b"]);
    }

    #[tokio::test]
    async fn test_unknown_item_has_no_customization() {
        let catalog = StaticCatalog::new();
        let groups = catalog.fetch_combination_groups("missing").await.unwrap();
        assert!(groups.is_empty());
    }
}
