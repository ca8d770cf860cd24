//! # Menu Repository
//!
//! The persisted menu cache: a snapshot of the catalog, seeded once.
//!
//! ## Bootstrap Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    bootstrap(catalog)                               │
//! │                                                                     │
//! │  menu relation already populated? ──► no-op, Ok(false)              │
//! │                │                                                    │
//! │                ▼ empty                                              │
//! │  insert every catalog item in one transaction ──► Ok(true)          │
//! │                                                                     │
//! │  Repeated calls across restarts therefore never duplicate the seed. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use bistro_core::{Catalog, MenuItem};

/// Repository for the menu cache.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Populates the menu relation from a catalog, only if it is currently
    /// empty. Returns whether a seed happened.
    pub async fn bootstrap(&self, catalog: &Catalog) -> DbResult<bool> {
        if self.count().await? > 0 {
            debug!("Menu already seeded, skipping bootstrap");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for item in catalog.items() {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO menu (name, category, price_cents)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&item.name)
            .bind(&item.category)
            .bind(item.price_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(items = catalog.len(), "Menu bootstrapped");
        Ok(true)
    }

    /// Lists the menu sorted by name.
    pub async fn list(&self) -> DbResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = sqlx::query_as(
            r#"
            SELECT name, category, price_cents
            FROM menu
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Number of items in the menu relation.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Rebuilds an in-memory catalog from the persisted menu cache.
    pub async fn load_catalog(&self) -> DbResult<Catalog> {
        let items = self.list().await?;
        Ok(Catalog::from_items(items))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    const MENU_CSV: &str = "\
name,category,price
Pizza,Food,200.00
Burger,Food,120.00
Cold Drink,Beverage,50.00
";

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_bootstrap_and_list() {
        let db = test_db().await;
        let catalog = Catalog::from_csv(MENU_CSV).unwrap();

        assert!(db.menu().bootstrap(&catalog).await.unwrap());

        let items = db.menu().list().await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger", "Cold Drink", "Pizza"]);
        assert_eq!(items[2].price_cents, 20_000);
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = test_db().await;
        let catalog = Catalog::from_csv(MENU_CSV).unwrap();

        assert!(db.menu().bootstrap(&catalog).await.unwrap());

        // Second seed, even with different content, must be a no-op.
        let other = Catalog::from_csv("name,price\nSushi,900.00\n").unwrap();
        assert!(!db.menu().bootstrap(&other).await.unwrap());

        assert_eq!(db.menu().count().await.unwrap(), 3);
        assert!(db
            .menu()
            .load_catalog()
            .await
            .unwrap()
            .get("Sushi")
            .is_none());
    }

    #[tokio::test]
    async fn test_load_catalog_round_trips() {
        let db = test_db().await;
        let catalog = Catalog::from_csv(MENU_CSV).unwrap();
        db.menu().bootstrap(&catalog).await.unwrap();

        let reloaded = db.menu().load_catalog().await.unwrap();
        assert_eq!(reloaded, catalog);
        assert_eq!(reloaded.lookup("Cold Drink").unwrap().price_cents, 5_000);
    }
}
