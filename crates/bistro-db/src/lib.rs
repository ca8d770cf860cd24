//! # bistro-db: Database Layer for Bistro POS
//!
//! This crate provides the durable side of the billing core: the append-only
//! order ledger, the menu cache, and the sales report queries. SQLite via
//! sqlx, async throughout.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bistro POS Data Flow                          │
//! │                                                                     │
//! │  bistro-core: catalog → bill lines → totals     (pure, no I/O)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    bistro-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │  ┌────────────┐   ┌────────────────┐   ┌──────────────────┐  │  │
//! │  │  │  Database  │   │  Repositories  │   │    Migrations    │  │  │
//! │  │  │ (pool.rs)  │◄──│  menu / order  │   │    (embedded)    │  │  │
//! │  │  │ SqlitePool │   │  / report      │   │  001_initial...  │  │  │
//! │  │  └────────────┘   └────────────────┘   └──────────────────┘  │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  ▼                                  │
//! │                         SQLite database file                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bistro_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./bistro.db")).await?;
//!
//! let seeded = db.menu().bootstrap(&catalog).await?;
//! let order_id = db.orders().create(&new_order).await?;
//! let buckets = db.reports().sales(ReportPeriod::Monthly).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::menu::MenuRepository;
pub use repository::order::OrderRepository;
pub use repository::report::ReportRepository;
