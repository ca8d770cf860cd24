//! # Sales Report Repository
//!
//! Read-only aggregation of the order ledger into periodic buckets.
//!
//! ## Key Derivation
//! ```text
//! created_at = "2024-01-05T12:30:00"
//!
//! daily    substr(created_at, 1, 10)        → "2024-01-05"
//! weekly   strftime('%Y-W%W', created_at)   → "2024-W01"
//! monthly  substr(created_at, 1, 7)         → "2024-01"
//! ```
//!
//! Aggregation happens in SQL (GROUP BY over the derived key); periods with
//! no orders never produce a bucket. Reports run on read-only queries and
//! may overlap an in-flight `create` - an order being committed concurrently
//! may or may not be included.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bistro_core::{ReportPeriod, SalesBucket};

/// Repository for sales report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Aggregates all orders into buckets for the given period, ascending by
    /// period key.
    pub async fn sales(&self, period: ReportPeriod) -> DbResult<Vec<SalesBucket>> {
        let key = match period {
            ReportPeriod::Daily => "substr(created_at, 1, 10)",
            ReportPeriod::Weekly => "strftime('%Y-W%W', created_at)",
            ReportPeriod::Monthly => "substr(created_at, 1, 7)",
        };

        // The key expression is one of the three constants above, never
        // caller input.
        let sql = format!(
            r#"
            SELECT {key} AS period_key,
                   SUM(total_cents) AS total_sales_cents,
                   COUNT(*) AS order_count
            FROM orders
            GROUP BY period_key
            ORDER BY period_key
            "#
        );

        let buckets: Vec<SalesBucket> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(?period, buckets = buckets.len(), "Sales report computed");
        Ok(buckets)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use bistro_core::billing::{compute_totals, make_line};
    use bistro_core::{Money, NewOrder, OrderMode, Percent};
    use chrono::{TimeZone, Utc};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// One order with the given grand total (single line, zero GST) on the
    /// given date.
    async fn order_on(db: &Database, y: i32, m: u32, d: u32, total: Money) {
        let lines = vec![make_line("Thali", 1, total).unwrap()];
        let totals = compute_totals(&lines, Percent::zero(), Percent::zero()).unwrap();
        let mut order = NewOrder::new(OrderMode::DineIn, "Cash", lines, totals);
        order.created_at = Utc.with_ymd_and_hms(y, m, d, 12, 30, 0).unwrap();
        db.orders().create(&order).await.unwrap();
    }

    #[tokio::test]
    async fn test_monthly_report_merges_the_month() {
        let db = test_db().await;
        order_on(&db, 2024, 1, 5, Money::from_cents(10_000)).await;
        order_on(&db, 2024, 1, 7, Money::from_cents(5_000)).await;

        let buckets = db.reports().sales(ReportPeriod::Monthly).await.unwrap();
        assert_eq!(
            buckets,
            vec![SalesBucket {
                period_key: "2024-01".to_string(),
                total_sales_cents: 15_000,
                order_count: 2,
            }]
        );
    }

    #[tokio::test]
    async fn test_daily_report_keeps_days_apart() {
        let db = test_db().await;
        order_on(&db, 2024, 1, 7, Money::from_cents(5_000)).await;
        order_on(&db, 2024, 1, 5, Money::from_cents(10_000)).await;
        order_on(&db, 2024, 1, 5, Money::from_cents(2_000)).await;

        let buckets = db.reports().sales(ReportPeriod::Daily).await.unwrap();
        let keys: Vec<&str> = buckets.iter().map(|b| b.period_key.as_str()).collect();

        // Ascending keys, zero-order days absent.
        assert_eq!(keys, vec!["2024-01-05", "2024-01-07"]);
        assert_eq!(buckets[0].total_sales_cents, 12_000);
        assert_eq!(buckets[0].order_count, 2);
        assert_eq!(buckets[1].total_sales_cents, 5_000);
        assert_eq!(buckets[1].order_count, 1);
    }

    #[tokio::test]
    async fn test_weekly_report_key_format() {
        let db = test_db().await;
        // 2024-01-01 was a Monday, so Jan 5 and Jan 7 share week 01.
        order_on(&db, 2024, 1, 5, Money::from_cents(10_000)).await;
        order_on(&db, 2024, 1, 7, Money::from_cents(5_000)).await;

        let buckets = db.reports().sales(ReportPeriod::Weekly).await.unwrap();
        assert_eq!(
            buckets,
            vec![SalesBucket {
                period_key: "2024-W01".to_string(),
                total_sales_cents: 15_000,
                order_count: 2,
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_ledger_empty_report() {
        let db = test_db().await;
        for period in [ReportPeriod::Daily, ReportPeriod::Weekly, ReportPeriod::Monthly] {
            assert!(db.reports().sales(period).await.unwrap().is_empty());
        }
    }
}
