//! Submission payload for the remote purchases/sales API.
//!
//! The engine owns no HTTP: it only supplies the numeric fields the form
//! submitter folds into its multipart request. Decimals serialize as strings
//! (`serde-with-str`), matching form-encoded transport.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::{DocumentTotals, TaxConfig, WithholdingKind};

/// Flat record of computed tax fields, in the shape the backend expects.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    pub dpp: Decimal,
    pub ppn: Decimal,
    pub pph: Decimal,
    /// Subtotal with additional costs (the backend's `total`).
    pub total: Decimal,
    pub grand_total: Decimal,
    /// "Before Calculate" or "After Calculate".
    pub tax_method: &'static str,
    pub ppn_percentage: Decimal,
    /// "PPh 22", "PPh 23", or "Custom".
    pub pph_type: &'static str,
    pub pph_percentage: Decimal,
}

impl SubmissionPayload {
    /// Map computed totals and the active configuration into wire fields.
    pub fn new(totals: &DocumentTotals, config: &TaxConfig) -> Self {
        Self {
            dpp: totals.dpp,
            ppn: totals.ppn,
            pph: totals.pph,
            total: totals.subtotal_with_costs,
            grand_total: totals.grand_total,
            tax_method: config.timing.label(),
            ppn_percentage: config.vat_rate.percent(),
            pph_type: config.withholding.label(),
            pph_percentage: match config.withholding {
                WithholdingKind::Custom => config.custom_rate,
                // Bracketed/statutory kinds carry the rate server-side.
                WithholdingKind::Pph22 | WithholdingKind::Pph23 => Decimal::ZERO,
            },
        }
    }
}
