//! # Catalog File Schema
//!
//! The on-disk JSON format for the service catalog and keyword table,
//! and the conversion into the immutable snapshots washday-core consumes.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog.json                                                           │
//! │                                                                         │
//! │  {                                                                      │
//! │    "services": [                                                        │
//! │      { "id": "…uuid…", "key": "shirt_polo", "name": "Shirt / Polo",    │
//! │        "base_price_kobo": 50000, "unit": "item",                       │
//! │        "description": null, "is_active": true }                        │
//! │    ],                                                                   │
//! │    "keywords": [                                                        │
//! │      { "service_key": "shirt_polo",                                    │
//! │        "keywords": ["shirt", "polo", "shirts"], "priority": 4 }        │
//! │    ]                                                                    │
//! │  }                                                                      │
//! │                                                                         │
//! │  Keyword entry ORDER MATTERS: it breaks score ties in the parser,      │
//! │  so the file preserves it and so do we.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Load Pipeline
//! ```text
//! CatalogFile::load(path)
//!      │  read + serde_json
//!      ▼
//! validate()  ← field rules + duplicate keys + dangling keyword refs
//!      │
//!      ├──► price_list()    → PriceList   (active services only)
//!      └──► keyword_table() → KeywordTable (declaration order kept)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use washday_core::types::{PriceList, Service};
use washday_core::validation::{
    validate_keyword, validate_price_kobo, validate_priority, validate_service_key,
    validate_service_name, validate_uuid,
};
use washday_core::{KeywordTable, ServiceKeywords};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Schema Types
// =============================================================================

/// One service row in the catalog file.
///
/// Mirrors [`washday_core::types::Service`]; kept separate so the file
/// schema can evolve without touching the core type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// UUID from the hosted backend's services table.
    pub id: String,
    /// Stable business key, e.g. `shirt_polo`.
    pub key: String,
    /// Display name for receipts and the ordering UI.
    pub name: String,
    /// Price in kobo.
    pub base_price_kobo: i64,
    /// Pricing unit, e.g. "item", "kg".
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Inactive services stay in the file but drop out of price snapshots.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_unit() -> String {
    "item".to_string()
}

fn default_true() -> bool {
    true
}

/// One keyword-table row in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Service key the keywords resolve to.
    pub service_key: String,
    /// Lower-case match phrases.
    pub keywords: Vec<String>,
    /// Ranking weight among overlapping matches.
    pub priority: u32,
}

/// A parsed (but not necessarily valid) catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Priceable services.
    pub services: Vec<ServiceEntry>,
    /// Parser vocabulary, in tie-break order.
    #[serde(default)]
    pub keywords: Vec<KeywordEntry>,
}

// =============================================================================
// Loading
// =============================================================================

impl CatalogFile {
    /// Parses a catalog from a JSON string. Does not validate.
    pub fn from_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a catalog from any reader. Does not validate.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads, parses, and validates a catalog file from disk.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog file");

        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_str(&json)?;
        catalog.validate()?;

        info!(
            path = %path.display(),
            services = catalog.services.len(),
            keyword_entries = catalog.keywords.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validates every field and cross-reference in the file.
    ///
    /// ## Checks
    /// - service ids are UUIDs; keys, names, prices pass core validation
    /// - service keys are unique
    /// - keyword entries carry valid priorities and lower-case keywords
    /// - every keyword entry references a declared service key
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen_keys: HashSet<&str> = HashSet::new();

        for service in &self.services {
            validate_uuid(&service.id)?;
            validate_service_key(&service.key)?;
            validate_service_name(&service.name)?;
            validate_price_kobo(service.base_price_kobo)?;

            if !seen_keys.insert(service.key.as_str()) {
                return Err(CatalogError::DuplicateServiceKey(service.key.clone()));
            }
        }

        for entry in &self.keywords {
            validate_service_key(&entry.service_key)?;
            validate_priority(entry.priority)?;
            for keyword in &entry.keywords {
                validate_keyword(keyword)?;
            }

            if !seen_keys.contains(entry.service_key.as_str()) {
                return Err(CatalogError::UnknownServiceKey(entry.service_key.clone()));
            }
        }

        debug!(
            services = self.services.len(),
            keyword_entries = self.keywords.len(),
            "Catalog validated"
        );
        Ok(())
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Builds the key → price snapshot for the pricing engine.
    ///
    /// Inactive services are excluded: a parsed line for a retired service
    /// then prices at zero, which surfaces in the UI total instead of
    /// silently billing an old price.
    pub fn price_list(&self) -> PriceList {
        self.services
            .iter()
            .filter(|s| s.is_active)
            .map(|s| (s.key.clone(), s.base_price_kobo))
            .collect()
    }

    /// Builds the parser keyword table, preserving declaration order.
    pub fn keyword_table(&self) -> KeywordTable {
        KeywordTable::new(
            self.keywords
                .iter()
                .map(|e| ServiceKeywords {
                    service_key: e.service_key.clone(),
                    keywords: e.keywords.clone(),
                    priority: e.priority,
                })
                .collect(),
        )
    }

    /// Converts the file's services into core domain types.
    pub fn services(&self) -> Vec<Service> {
        self.services
            .iter()
            .map(|s| Service {
                id: s.id.clone(),
                key: s.key.clone(),
                name: s.name.clone(),
                base_price_kobo: s.base_price_kobo,
                unit: s.unit.clone(),
                description: s.description.clone(),
                is_active: s.is_active,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use washday_core::parser::{OrderParser, UnmatchedPolicy};
    use washday_core::pricing::calculate_total;

    fn init_logs() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    }

    const SAMPLE: &str = r#"{
        "services": [
            {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "key": "shirt_polo",
                "name": "Shirt / Polo",
                "base_price_kobo": 50000,
                "unit": "item",
                "is_active": true
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440001",
                "key": "wedding_gown",
                "name": "Wedding Gown (Basic)",
                "base_price_kobo": 1500000,
                "is_active": true
            },
            {
                "id": "550e8400-e29b-41d4-a716-446655440002",
                "key": "retired_service",
                "name": "Retired Service",
                "base_price_kobo": 10000,
                "is_active": false
            }
        ],
        "keywords": [
            {
                "service_key": "wedding_gown",
                "keywords": ["wedding gown", "wedding dress", "bridal gown"],
                "priority": 10
            },
            {
                "service_key": "shirt_polo",
                "keywords": ["shirt", "polo", "shirts", "polos"],
                "priority": 4
            }
        ]
    }"#;

    #[test]
    fn test_parse_and_validate_sample() {
        init_logs();
        let catalog = CatalogFile::from_str(SAMPLE).unwrap();
        catalog.validate().unwrap();
        assert_eq!(catalog.services.len(), 3);
        assert_eq!(catalog.keywords.len(), 2);
    }

    #[test]
    fn test_defaults_applied() {
        let catalog = CatalogFile::from_str(SAMPLE).unwrap();
        // unit/description were omitted on wedding_gown
        assert_eq!(catalog.services[1].unit, "item");
        assert_eq!(catalog.services[1].description, None);
    }

    #[test]
    fn test_price_list_excludes_inactive() {
        let catalog = CatalogFile::from_str(SAMPLE).unwrap();
        let prices = catalog.price_list();

        assert_eq!(prices.len(), 2);
        assert_eq!(prices.price_of("shirt_polo").kobo(), 50_000);
        assert!(!prices.contains("retired_service"));
        // Retired key prices at zero, not at its old price
        assert_eq!(prices.price_of("retired_service").kobo(), 0);
    }

    #[test]
    fn test_keyword_table_preserves_order() {
        let catalog = CatalogFile::from_str(SAMPLE).unwrap();
        let table = catalog.keyword_table();

        let keys: Vec<&str> = table.entries().iter().map(|e| e.service_key.as_str()).collect();
        assert_eq!(keys, ["wedding_gown", "shirt_polo"]);
    }

    #[test]
    fn test_loaded_table_drives_the_parser() {
        init_logs();
        let catalog = CatalogFile::from_str(SAMPLE).unwrap();
        catalog.validate().unwrap();

        let parser = OrderParser::new(catalog.keyword_table(), UnmatchedPolicy::Drop);
        let lines = parser.parse("10 shirts and 1 wedding gown");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].service_key, "shirt_polo");
        assert_eq!(lines[1].service_key, "wedding_gown");

        let total = calculate_total(&lines, &catalog.price_list(), false);
        assert_eq!(total.kobo(), 10 * 50_000 + 1_500_000);
    }

    #[test]
    fn test_duplicate_service_key_rejected() {
        let json = r#"{
            "services": [
                { "id": "550e8400-e29b-41d4-a716-446655440000",
                  "key": "shirt_polo", "name": "A", "base_price_kobo": 1 },
                { "id": "550e8400-e29b-41d4-a716-446655440001",
                  "key": "shirt_polo", "name": "B", "base_price_kobo": 2 }
            ],
            "keywords": []
        }"#;
        let catalog = CatalogFile::from_str(json).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateServiceKey(_))
        ));
    }

    #[test]
    fn test_dangling_keyword_reference_rejected() {
        let json = r#"{
            "services": [],
            "keywords": [
                { "service_key": "ghost", "keywords": ["ghost"], "priority": 1 }
            ]
        }"#;
        let catalog = CatalogFile::from_str(json).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownServiceKey(_))
        ));
    }

    #[test]
    fn test_uppercase_keyword_rejected() {
        let json = r#"{
            "services": [
                { "id": "550e8400-e29b-41d4-a716-446655440000",
                  "key": "shirt_polo", "name": "Shirt", "base_price_kobo": 1 }
            ],
            "keywords": [
                { "service_key": "shirt_polo", "keywords": ["Shirt"], "priority": 4 }
            ]
        }"#;
        let catalog = CatalogFile::from_str(json).unwrap();
        assert!(matches!(catalog.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{
            "services": [
                { "id": "550e8400-e29b-41d4-a716-446655440000",
                  "key": "shirt_polo", "name": "Shirt", "base_price_kobo": -5 }
            ],
            "keywords": []
        }"#;
        let catalog = CatalogFile::from_str(json).unwrap();
        assert!(matches!(catalog.validate(), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            CatalogFile::from_str("{ not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_shipped_default_catalog() {
        init_logs();
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/catalog.json");
        let catalog = CatalogFile::load(path).unwrap();

        // The shipped file mirrors the built-in vocabulary
        let builtin = KeywordTable::builtin();
        let table = catalog.keyword_table();
        assert_eq!(table.entries().len(), builtin.entries().len());

        let parser = OrderParser::new(table, UnmatchedPolicy::Drop);
        let lines = parser.parse("1 wedding gown");
        assert_eq!(lines[0].service_key, "wedding_gown");
    }
}
