//! # Repository Module
//!
//! Database repository implementations for Bistro POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Caller                                                             │
//! │       │  db.orders().create(&new_order)                             │
//! │       ▼                                                             │
//! │  OrderRepository                                                    │
//! │  ├── create(&self, order)                                           │
//! │  └── get_by_id(&self, id)                                           │
//! │       │  SQL                                                        │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place per relation                        │
//! │  • Easy to test against an in-memory database                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`menu::MenuRepository`] - menu cache bootstrap and listing
//! - [`order::OrderRepository`] - the append-only order ledger
//! - [`report::ReportRepository`] - periodic sales aggregation

pub mod menu;
pub mod order;
pub mod report;
