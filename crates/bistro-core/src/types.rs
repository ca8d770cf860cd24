//! # Domain Types
//!
//! Core domain types used throughout Bistro POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │   MenuItem    │   │   BillLine    │   │     Order     │         │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │         │
//! │  │  name (key)   │──►│  item_name    │──►│  id (ledger)  │         │
//! │  │  category     │   │  quantity     │   │  mode         │         │
//! │  │  price_cents  │   │  unit_price   │   │  totals       │         │
//! │  └───────────────┘   │  line_total   │   │  lines        │         │
//! │                      └───────────────┘   └───────────────┘         │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐         │
//! │  │   OrderMode   │   │ ReportPeriod  │   │  SalesBucket  │         │
//! │  │  DineIn       │   │  Daily        │   │  period_key   │         │
//! │  │  TakeAway     │   │  Weekly       │   │  total_sales  │         │
//! │  │  Delivery     │   │  Monthly      │   │  order_count  │         │
//! │  └───────────────┘   └───────────────┘   └───────────────┘         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All monetary fields are integer cents (`*_cents: i64`) with [`Money`]
//! accessor methods; see the money module for the rounding policy.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// One entry of the menu catalog.
///
/// Created at catalog bootstrap and immutable for the rest of the session;
/// `name` is the unique, case-sensitive catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MenuItem {
    /// Display name and catalog key.
    pub name: String,

    /// Optional grouping ("Food", "Beverage", ...).
    pub category: Option<String>,

    /// Unit price in cents (non-negative).
    pub price_cents: i64,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Bill Line
// =============================================================================

/// One catalog item at a given quantity on an in-progress bill.
///
/// Uses the snapshot pattern: `unit_price_cents` is copied from the catalog
/// when the line is created and never re-read, so a catalog price change
/// cannot retroactively alter a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BillLine {
    /// Name of the referenced menu item.
    pub item_name: String,

    /// Quantity ordered (always positive).
    pub quantity: i64,

    /// Unit price in cents at time of line creation (frozen).
    pub unit_price_cents: i64,

    /// quantity × unit price, exact in cents.
    pub line_total_cents: i64,
}

impl BillLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// The aggregate amounts of one bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal_cents: i64,

    /// GST surcharge derived from the subtotal.
    pub gst_cents: i64,

    /// Discount derived from the subtotal (exactly 0 when no discount).
    pub discount_cents: i64,

    /// subtotal + gst - discount.
    pub total_cents: i64,
}

impl Totals {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the GST amount as Money.
    #[inline]
    pub fn gst(&self) -> Money {
        Money::from_cents(self.gst_cents)
    }

    /// Returns the discount amount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Checks the two ledger invariants against a set of lines:
    /// `subtotal == Σ line_total` and `total == subtotal + gst - discount`.
    pub fn consistent_with(&self, lines: &[BillLine]) -> bool {
        let line_sum: i64 = lines.iter().map(|l| l.line_total_cents).sum();
        self.subtotal_cents == line_sum
            && self.total_cents == self.subtotal_cents + self.gst_cents - self.discount_cents
    }
}

// =============================================================================
// Order Mode
// =============================================================================

/// How an order is fulfilled.
///
/// A closed enumeration; the free-text variants floating around till screens
/// ("Dine-In", "Dine-in", "take away") normalize through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum OrderMode {
    /// Eating at the restaurant.
    DineIn,
    /// Counter pickup.
    TakeAway,
    /// Delivered to the customer.
    Delivery,
}

impl OrderMode {
    /// Storage/serde identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderMode::DineIn => "dine_in",
            OrderMode::TakeAway => "take_away",
            OrderMode::Delivery => "delivery",
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Normalize away case and separator noise: "Dine-In" == "dine_in"
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match folded.as_str() {
            "dinein" => Ok(OrderMode::DineIn),
            "takeaway" => Ok(OrderMode::TakeAway),
            "delivery" => Ok(OrderMode::Delivery),
            _ => Err(ValidationError::NotAllowed {
                field: "mode".to_string(),
                allowed: vec![
                    "dine_in".to_string(),
                    "take_away".to_string(),
                    "delivery".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A finalized order as read back from the ledger.
///
/// Orders are append-only: never mutated after creation, never deleted by
/// the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Ledger identifier, assigned by the store, monotonically increasing.
    pub id: i64,

    /// Fulfilment mode.
    pub mode: OrderMode,

    /// Free-form payment method ("Cash", "UPI", ...).
    pub payment_method: String,

    /// Aggregate amounts.
    pub totals: Totals,

    /// When the order was finalized (second precision).
    pub created_at: DateTime<Utc>,

    /// Line items in order of entry. Never empty.
    pub lines: Vec<BillLine>,
}

// =============================================================================
// New Order
// =============================================================================

/// An order about to be persisted (everything but the store-assigned id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub mode: OrderMode,
    pub payment_method: String,
    pub totals: Totals,
    /// Defaults to now; truncated to second precision to match the ledger.
    pub created_at: DateTime<Utc>,
    pub lines: Vec<BillLine>,
}

impl NewOrder {
    /// Builds a new order stamped with the current time.
    pub fn new(
        mode: OrderMode,
        payment_method: impl Into<String>,
        lines: Vec<BillLine>,
        totals: Totals,
    ) -> Self {
        let now = Utc::now();
        NewOrder {
            mode,
            payment_method: payment_method.into(),
            totals,
            created_at: now.with_nanosecond(0).unwrap_or(now),
            lines,
        }
    }

    /// Checks the order is fit for the ledger: at least one line, and totals
    /// consistent with those lines. Runs before any row is written.
    pub fn validate(&self) -> crate::error::CoreResult<()> {
        if self.lines.is_empty() {
            return Err(crate::error::CoreError::EmptyCart);
        }
        if !self.totals.consistent_with(&self.lines) {
            return Err(crate::error::CoreError::InconsistentTotals);
        }
        Ok(())
    }
}

// =============================================================================
// Report Types
// =============================================================================

/// Aggregation granularity for sales reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// One bucket per calendar day (`YYYY-MM-DD`).
    Daily,
    /// One bucket per week-of-year (`YYYY-Www`).
    Weekly,
    /// One bucket per calendar month (`YYYY-MM`).
    Monthly,
}

impl FromStr for ReportPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ReportPeriod::Daily),
            "weekly" => Ok(ReportPeriod::Weekly),
            "monthly" => Ok(ReportPeriod::Monthly),
            _ => Err(ValidationError::NotAllowed {
                field: "period".to_string(),
                allowed: vec![
                    "daily".to_string(),
                    "weekly".to_string(),
                    "monthly".to_string(),
                ],
            }),
        }
    }
}

/// One row of a sales report: all orders sharing a period key.
///
/// Ephemeral; computed on demand, never persisted. Periods with no orders
/// are simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesBucket {
    /// Period key derived from `created_at` ("2024-01-05", "2024-W01",
    /// "2024-01").
    pub period_key: String,

    /// Sum of order totals within the period, in cents.
    pub total_sales_cents: i64,

    /// Number of orders within the period.
    pub order_count: i64,
}

impl SalesBucket {
    /// Returns the period's sales as Money.
    #[inline]
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
