//! Core calculation types, the tax pipeline, and input validation.
//!
//! The engine is a stateless recomputation pipeline: forms hand it a list of
//! line items plus a [`TaxConfig`] and get back [`DocumentTotals`] on every
//! input change. Nothing here performs I/O or holds state.

mod builder;
mod calc;
mod error;
mod types;
mod validation;

pub use builder::*;
pub use calc::*;
pub use error::*;
pub use types::*;
pub use validation::*;
