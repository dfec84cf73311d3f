//! # pajak
//!
//! Indonesian purchase/sales tax calculation library: line discounts, DPP
//! (tax base), PPN (VAT at 11% or 12% under the HPP transition), PPh 22/23
//! withholding, and document grand totals.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The engine is pure and synchronous: forms recompute totals on every input
//! change and hand the result to an external submitter.
//!
//! ## Quick Start
//!
//! ```rust
//! use pajak::engine::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItemBuilder::new(dec!(10), dec!(100_000))
//!         .discount_percent(dec!(10))
//!         .build(),
//! ];
//! let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
//!     .build()
//!     .unwrap();
//!
//! let totals = calculate(&items, &config);
//! assert_eq!(totals.subtotal, dec!(900_000));
//! assert_eq!(totals.ppn, dec!(99_000));
//! assert_eq!(totals.grand_total, dec!(999_000));
//! ```

pub mod engine;
pub mod input;
pub mod payload;

// Re-export engine types at crate root for convenience
pub use crate::engine::*;
