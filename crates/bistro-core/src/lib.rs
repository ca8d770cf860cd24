//! # bistro-core: Pure Business Logic for Bistro POS
//!
//! This crate is the heart of Bistro POS. It contains the billing computation
//! core as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bistro POS Data Flow                          │
//! │                                                                     │
//! │  Till / front end (out of scope here)                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │              ★ bistro-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐  ┌─────────┐  ┌──────────┐  ┌────────────┐      │  │
//! │  │  │  money  │  │ catalog │  │ billing  │  │ validation │      │  │
//! │  │  │  Money  │  │ Catalog │  │make_line │  │   rules    │      │  │
//! │  │  │ Percent │  │ MenuItem│  │ totals   │  │   checks   │      │  │
//! │  │  └─────────┘  └─────────┘  └──────────┘  └────────────┘      │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │                                  ▼                                  │
//! │  bistro-db: persists finalized orders, serves sales reports         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use bistro_core::billing::{compute_totals, make_line};
//! use bistro_core::money::{Money, Percent};
//! use bistro_core::DEFAULT_GST;
//!
//! let lines = vec![
//!     make_line("Pizza", 2, Money::from_cents(20_000)).unwrap(),
//!     make_line("Cold Drink", 1, Money::from_cents(5_000)).unwrap(),
//! ];
//!
//! let totals = compute_totals(&lines, Percent::zero(), DEFAULT_GST).unwrap();
//! assert_eq!(totals.subtotal().cents(), 45_000); // 450.00
//! assert_eq!(totals.gst().cents(), 2_250);       // 22.50
//! assert_eq!(totals.total().cents(), 47_250);    // 472.50
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bistro_core::Money` instead of
// `use bistro_core::money::Money`

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Percent};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default GST rate applied when a caller has no configured rate: 5%.
///
/// GST is always a parameter of [`billing::compute_totals`]; this constant is
/// merely the conventional value, never baked into the formula.
pub const DEFAULT_GST: Percent = Percent::from_bps(500);

/// Maximum quantity of a single item on one bill line.
///
/// Guards against accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
