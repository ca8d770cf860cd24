//! # Menu Catalog
//!
//! Name-keyed lookup of menu items, loaded once from a tabular bootstrap
//! source.
//!
//! ## Load Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Catalog::from_csv                               │
//! │                                                                     │
//! │  header row ──► locate columns case-insensitively                   │
//! │                 name|item (required), price (required),             │
//! │                 category (optional)                                 │
//! │       │                                                             │
//! │       ├── required column absent ──► Err(MenuFormat)  (fatal)       │
//! │       ▼                                                             │
//! │  data rows ──► per-row field validation                             │
//! │       ├── empty name / bad price ──► row skipped   (not fatal)      │
//! │       ├── duplicate name ──────────► first wins                     │
//! │       └── ok ──────────────────────► MenuItem inserted              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The schema check is explicit and up front; malformed *rows* degrade
//! gracefully, a malformed *schema* fails the whole load and leaves any
//! previous catalog untouched.

use std::collections::BTreeMap;

use crate::billing;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BillLine, MenuItem};

/// The menu catalog: a case-sensitive name → item mapping.
///
/// Immutable after load for the duration of a session. Backed by a BTreeMap
/// so iteration is always name-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: BTreeMap<String, MenuItem>,
}

impl Catalog {
    /// Parses a catalog from CSV text.
    ///
    /// Header columns are matched case-insensitively; the name column may be
    /// called `name` or `item`. Fails with [`CoreError::MenuFormat`] only
    /// when a required column is absent from the schema (or the header is
    /// unreadable); field-level breakage skips the row.
    pub fn from_csv(source: &str) -> CoreResult<Catalog> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| CoreError::MenuFormat(e.to_string()))?
            .clone();

        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };

        let name_col = find(&["name", "item"]).ok_or_else(|| {
            CoreError::MenuFormat("missing required column 'name' (or 'item')".to_string())
        })?;
        let price_col = find(&["price"])
            .ok_or_else(|| CoreError::MenuFormat("missing required column 'price'".to_string()))?;
        let category_col = find(&["category"]);

        let mut catalog = Catalog::default();
        for record in reader.records() {
            // A record broken at the field level is skipped, not fatal.
            let Ok(record) = record else { continue };

            let Some(name) = record.get(name_col).map(str::trim).filter(|n| !n.is_empty())
            else {
                continue;
            };
            let Some(price) = record
                .get(price_col)
                .and_then(Money::parse)
                .filter(|p| !p.is_negative())
            else {
                continue;
            };

            let category = category_col
                .and_then(|col| record.get(col))
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string);

            catalog.insert_first_wins(MenuItem {
                name: name.to_string(),
                category,
                price_cents: price.cents(),
            });
        }

        Ok(catalog)
    }

    /// Builds a catalog from already-validated items (e.g. the persisted
    /// menu cache). Duplicate names keep the first occurrence, matching the
    /// CSV load semantics.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Catalog {
        let mut catalog = Catalog::default();
        for item in items {
            catalog.insert_first_wins(item);
        }
        catalog
    }

    fn insert_first_wins(&mut self, item: MenuItem) {
        self.items.entry(item.name.clone()).or_insert(item);
    }

    /// Looks up an item by exact name.
    pub fn lookup(&self, name: &str) -> CoreResult<&MenuItem> {
        self.items
            .get(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// Like [`lookup`](Catalog::lookup), but without the error wrapping.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.get(name)
    }

    /// Creates a bill line for `quantity` of the named item, snapshotting
    /// the catalog price into the line.
    pub fn make_line(&self, name: &str, quantity: i64) -> CoreResult<BillLine> {
        let item = self.lookup(name)?;
        billing::make_line(&item.name, quantity, item.price())
    }

    /// Iterates items in name order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.values()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
