//! The fixed model catalog.
//!
//! The catalog ships as a JSON asset compiled into the binary. It is loaded
//! once at startup and read-only afterwards; callers own the [`Catalog`]
//! value and hand it to whatever needs it.

use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::models::ModelRecord;

/// Compiled-in catalog, ordered from cheapest to most expensive.
const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Number of trailing catalog entries left out of the default selection.
pub const DEFAULT_EXCLUDED: usize = 2;

/// Immutable ordered list of model records with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    models: Vec<ModelRecord>,
}

impl Catalog {
    /// Load the compiled-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let models: Vec<ModelRecord> = serde_json::from_str(json)?;
        Self::new(models)
    }

    /// Build a catalog from records, keeping their order.
    pub fn new(models: Vec<ModelRecord>) -> Result<Self> {
        if models.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(models.len());
        for model in &models {
            if !seen.insert(model.id.as_str()) {
                return Err(CatalogError::DuplicateId(model.id.clone()));
            }
        }

        tracing::debug!(models = models.len(), "catalog loaded");
        Ok(Self { models })
    }

    /// All records in catalog order.
    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&ModelRecord> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Whether the catalog has a record with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Every id, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.id.as_str())
    }

    /// Ids of the default selection: everything except the last
    /// [`DEFAULT_EXCLUDED`] entries by position.
    pub fn default_ids(&self) -> impl Iterator<Item = &str> {
        let keep = self.models.len().saturating_sub(DEFAULT_EXCLUDED);
        self.models[..keep].iter().map(|m| m.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 19);
        assert_eq!(catalog.models()[0].id, "gemini-flash-lite");
        assert_eq!(catalog.models()[18].id, "o1-pro");
    }

    #[test]
    fn test_builtin_catalog_prices() {
        let catalog = Catalog::builtin().unwrap();
        let sonnet = catalog.get("claude-sonnet").unwrap();
        assert_eq!(sonnet.display_name, "Claude 3.5 Sonnet");
        assert_eq!(sonnet.provider, Provider::Anthropic);
        assert_eq!(sonnet.input_price, 3.0);
        assert_eq!(sonnet.output_price, 15.0);

        let mistral = catalog.get("mistral-small").unwrap();
        assert_eq!(mistral.provider, Provider::MistralAI);

        let grok = catalog.get("grok-mini").unwrap();
        assert_eq!(grok.provider, Provider::XAi);
    }

    #[test]
    fn test_builtin_prices_non_negative() {
        let catalog = Catalog::builtin().unwrap();
        for model in catalog.models() {
            assert!(model.input_price >= 0.0, "{}", model.id);
            assert!(model.output_price >= 0.0, "{}", model.id);
        }
    }

    #[test]
    fn test_default_ids_drop_last_two() {
        let catalog = Catalog::builtin().unwrap();
        let defaults: Vec<&str> = catalog.default_ids().collect();
        assert_eq!(defaults.len(), 17);
        assert!(!defaults.contains(&"chatgpt-4-5"));
        assert!(!defaults.contains(&"o1-pro"));
        assert_eq!(defaults.last(), Some(&"chatgpt-o1"));
    }

    #[test]
    fn test_default_ids_short_catalog() {
        let catalog =
            Catalog::new(vec![ModelRecord::new("only", "Only", Provider::Google, 1.0, 2.0)])
                .unwrap();
        assert_eq!(catalog.default_ids().count(), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::new(vec![
            ModelRecord::new("a", "A", Provider::Google, 1.0, 2.0),
            ModelRecord::new("a", "A again", Provider::OpenAI, 1.0, 2.0),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.contains("grok-3"));
        assert!(!catalog.contains("gpt-9"));
        assert_eq!(catalog.ids().count(), catalog.len());
    }
}
