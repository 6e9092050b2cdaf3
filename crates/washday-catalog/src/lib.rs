//! # washday-catalog: Catalog Configuration Layer for Washday
//!
//! This crate loads the service catalog and the parser keyword table from
//! JSON configuration files and hands washday-core immutable snapshots.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Washday Data Flow                                │
//! │                                                                         │
//! │  catalog.json (operations-editable, no redeploy needed)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 washday-catalog (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   CatalogFile::load ──► validate ──┬──► PriceList               │   │
//! │  │                                    └──► KeywordTable            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  washday-core: OrderParser::new(table, policy)                         │
//! │                pricing::quote(lines, prices, modifiers)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`schema`] - File format, validation, and snapshot builders
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use washday_catalog::CatalogFile;
//! use washday_core::parser::{OrderParser, UnmatchedPolicy};
//!
//! # fn main() -> Result<(), washday_catalog::CatalogError> {
//! let catalog = CatalogFile::load("config/catalog.json")?;
//!
//! let parser = OrderParser::new(catalog.keyword_table(), UnmatchedPolicy::Drop);
//! let lines = parser.parse("10 shirts, 5 trousers");
//! let total = washday_core::pricing::calculate_total(&lines, &catalog.price_list(), false);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use schema::{CatalogFile, KeywordEntry, ServiceEntry};
