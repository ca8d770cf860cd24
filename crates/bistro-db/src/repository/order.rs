//! # Order Repository
//!
//! The append-only order ledger.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                               │
//! │                                                                     │
//! │  1. VALIDATE                                                        │
//! │     └── NewOrder::validate() - empty cart / inconsistent totals     │
//! │         are rejected before any row is written                      │
//! │                                                                     │
//! │  2. PERSIST (one transaction)                                       │
//! │     └── INSERT order header                                         │
//! │     └── INSERT every line item                                      │
//! │     └── COMMIT - all rows become visible together, or the           │
//! │         rollback on drop leaves the ledger exactly as it was        │
//! │                                                                     │
//! │  3. DONE                                                            │
//! │     └── orders are never updated or deleted afterwards              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use bistro_core::{BillLine, NewOrder, Order, OrderMode, Totals};

/// Ledger timestamp format: second precision, lexicographically sortable,
/// and sliceable by the report key expressions (substr/strftime).
const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Repository for the order ledger.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Persists a finalized order: header and all line items as a single
    /// atomic unit. Returns the store-assigned, monotonically increasing id.
    pub async fn create(&self, order: &NewOrder) -> DbResult<i64> {
        order.validate()?;

        debug!(
            mode = %order.mode,
            lines = order.lines.len(),
            total_cents = order.totals.total_cents,
            "Persisting order"
        );

        let mut tx = self.pool.begin().await?;

        let created_at = order.created_at.format(TS_FORMAT).to_string();
        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                mode, payment_method,
                subtotal_cents, gst_cents, discount_cents, total_cents,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(order.mode)
        .bind(&order.payment_method)
        .bind(order.totals.subtotal_cents)
        .bind(order.totals.gst_cents)
        .bind(order.totals.discount_cents)
        .bind(order.totals.total_cents)
        .bind(&created_at)
        .execute(&mut *tx)
        .await?;

        let order_id = result.last_insert_rowid();

        for line in &order.lines {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id, item_name, quantity, unit_price_cents, line_total_cents
                ) VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(order_id)
            .bind(&line.item_name)
            .bind(line.quantity)
            .bind(line.unit_price_cents)
            .bind(line.line_total_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(id = order_id, "Order persisted");
        Ok(order_id)
    }

    /// Reads an order back from the ledger, lines in entry order.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, mode, payment_method,
                   subtotal_cents, gst_cents, discount_cents, total_cents,
                   created_at
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let lines: Vec<BillLine> = sqlx::query_as(
            r#"
            SELECT item_name, quantity, unit_price_cents, line_total_cents
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(row.into_order(lines)?))
    }

    /// Number of orders in the ledger.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw `orders` row; lines are fetched separately and attached.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    mode: OrderMode,
    payment_method: String,
    subtotal_cents: i64,
    gst_cents: i64,
    discount_cents: i64,
    total_cents: i64,
    created_at: String,
}

impl OrderRow {
    fn into_order(self, lines: Vec<BillLine>) -> DbResult<Order> {
        Ok(Order {
            id: self.id,
            mode: self.mode,
            payment_method: self.payment_method,
            totals: Totals {
                subtotal_cents: self.subtotal_cents,
                gst_cents: self.gst_cents,
                discount_cents: self.discount_cents,
                total_cents: self.total_cents,
            },
            created_at: decode_ts(&self.created_at)?,
            lines,
        })
    }
}

fn decode_ts(raw: &str) -> DbResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TS_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DbError::Internal(format!("corrupt ledger timestamp '{raw}': {e}")))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use bistro_core::billing::{compute_totals, make_line};
    use bistro_core::{CoreError, Money, Percent, DEFAULT_GST};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample_order() -> NewOrder {
        let lines = vec![
            make_line("Pizza", 2, Money::from_cents(20_000)).unwrap(),
            make_line("Cold Drink", 1, Money::from_cents(5_000)).unwrap(),
        ];
        let totals = compute_totals(&lines, Percent::zero(), DEFAULT_GST).unwrap();
        NewOrder::new(OrderMode::DineIn, "Cash", lines, totals)
    }

    #[tokio::test]
    async fn test_create_then_read_round_trips() {
        let db = test_db().await;
        let order = sample_order();

        let id = db.orders().create(&order).await.unwrap();
        let fetched = db.orders().get_by_id(id).await.unwrap().unwrap();

        assert_eq!(fetched.id, id);
        assert_eq!(fetched.mode, order.mode);
        assert_eq!(fetched.payment_method, order.payment_method);
        assert_eq!(fetched.totals, order.totals);
        assert_eq!(fetched.created_at, order.created_at);
        assert_eq!(fetched.lines, order.lines);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let db = test_db().await;

        let first = db.orders().create(&sample_order()).await.unwrap();
        let second = db.orders().create(&sample_order()).await.unwrap();

        assert!(second > first);
        assert_eq!(db.orders().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_lines_keep_entry_order() {
        let db = test_db().await;
        let lines = vec![
            make_line("Pasta", 1, Money::from_cents(15_000)).unwrap(),
            make_line("Burger", 3, Money::from_cents(12_000)).unwrap(),
            make_line("Pizza", 1, Money::from_cents(20_000)).unwrap(),
        ];
        let totals = compute_totals(&lines, Percent::zero(), DEFAULT_GST).unwrap();
        let order = NewOrder::new(OrderMode::TakeAway, "UPI", lines.clone(), totals);

        let id = db.orders().create(&order).await.unwrap();
        let fetched = db.orders().get_by_id(id).await.unwrap().unwrap();

        // Entry order, not name order.
        assert_eq!(fetched.lines, lines);
    }

    #[tokio::test]
    async fn test_empty_order_rejected_without_writes() {
        let db = test_db().await;
        let mut order = sample_order();
        order.lines.clear();

        let err = db.orders().create(&order).await.unwrap_err();
        assert!(matches!(err, DbError::Domain(CoreError::EmptyCart)));
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_inconsistent_totals_rejected_without_writes() {
        let db = test_db().await;
        let mut order = sample_order();
        order.totals.total_cents += 1;

        let err = db.orders().create(&order).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Domain(CoreError::InconsistentTotals)
        ));
        assert_eq!(db.orders().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let db = test_db().await;
        assert!(db.orders().get_by_id(42).await.unwrap().is_none());
    }
}
