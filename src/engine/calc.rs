//! The discount, DPP, PPN, and PPh calculation pipeline.
//!
//! Every function here is total over normalized decimal inputs: no panics,
//! no `NaN` (Decimal has none), no I/O. Callers normalize raw form strings
//! through [`crate::input`] before invoking anything in this module.
//!
//! The PPN rate formulas follow the HPP-law transition rules: under the 12%
//! regime with tax-exclusive entry, the base is carved back by 11/12 so the
//! real tax burden matches the 11% base. These are statutory formulas and are
//! reproduced exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::*;

/// PPh 23 service withholding rate (2%).
pub const PPH23_SERVICE_RATE: Decimal = dec!(0.02);

/// PPh 22 first bracket upper bound (inclusive): 500 million rupiah.
pub const PPH22_BRACKET_1_LIMIT: Decimal = dec!(500_000_000);

/// PPh 22 second bracket upper bound (inclusive): 10 billion rupiah.
pub const PPH22_BRACKET_2_LIMIT: Decimal = dec!(10_000_000_000);

/// Round to whole rupiah using half-up (commercial rounding).
fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Discount for one line, in rupiah.
///
/// Percent discounts apply to the line gross; both modes are capped at the
/// gross and never go negative.
pub fn line_discount(item: &LineItem) -> Decimal {
    let gross = item.gross();
    if gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let raw = match item.discount.mode {
        DiscountMode::Percent => gross * item.discount.value / dec!(100),
        DiscountMode::Amount => item.discount.value,
    };
    raw.clamp(Decimal::ZERO, gross)
}

/// Sum of per-line discounts.
pub fn total_discount(items: &[LineItem]) -> Decimal {
    items.iter().map(line_discount).sum()
}

/// Aggregate subtotal after returns and discounts, floored at zero.
///
/// Returns reduce each line at its own unit price, independent of discount.
/// Discounts and returns together can drive the sum negative; the aggregate
/// never goes below zero.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    let net: Decimal = items.iter().map(LineItem::net).sum();
    (net - total_discount(items)).max(Decimal::ZERO)
}

/// Tax base (Dasar Pengenaan Pajak) derived from the subtotal with costs.
pub fn dpp(subtotal_with_costs: Decimal, vat_rate: VatRate, timing: TaxTiming) -> Decimal {
    match (timing, vat_rate) {
        (TaxTiming::Before, VatRate::Eleven) => subtotal_with_costs,
        // 12% regime carve-back: base × 11/12 keeps the effective burden
        // equal to the 11% base (HPP transition rule).
        (TaxTiming::Before, VatRate::Twelve) => subtotal_with_costs * dec!(11) / dec!(12),
        (TaxTiming::After, VatRate::Eleven) => subtotal_with_costs / dec!(1.11),
        (TaxTiming::After, VatRate::Twelve) => subtotal_with_costs / dec!(1.12),
    }
}

/// PPN (VAT) on the tax base: `dpp × rate / 100` for both timings.
pub fn ppn(dpp: Decimal, vat_rate: VatRate) -> Decimal {
    dpp * vat_rate.percent() / dec!(100)
}

/// Withholding income tax for the document.
///
/// PPh 23 applies [`PPH23_SERVICE_RATE`] to a VAT-grossed base; PPh 22 is a
/// bracket schedule on DPP; custom applies the configured percentage to DPP.
/// PPh 22/23 round half-up to whole rupiah, custom follows `rounding`.
pub fn pph(
    subtotal_with_costs: Decimal,
    dpp: Decimal,
    ppn: Decimal,
    config: &TaxConfig,
) -> Decimal {
    match config.withholding {
        WithholdingKind::Pph23 => {
            let divisor = match config.timing {
                TaxTiming::Before => dec!(1.11),
                TaxTiming::After => dec!(1.011),
            };
            round_half_up((subtotal_with_costs + ppn) / divisor * PPH23_SERVICE_RATE)
        }
        WithholdingKind::Pph22 => {
            let rate = if dpp <= PPH22_BRACKET_1_LIMIT {
                dec!(0.01)
            } else if dpp <= PPH22_BRACKET_2_LIMIT {
                dec!(0.015)
            } else {
                dec!(0.025)
            };
            round_half_up(dpp * rate)
        }
        WithholdingKind::Custom => {
            let raw = dpp * config.custom_rate / dec!(100);
            match config.rounding {
                RoundingPolicy::WholeUnit => round_half_up(raw),
                RoundingPolicy::Exact => raw,
            }
        }
    }
}

/// Grand total for the document.
pub fn grand_total(
    subtotal_with_costs: Decimal,
    dpp: Decimal,
    ppn: Decimal,
    pph: Decimal,
    timing: TaxTiming,
) -> Decimal {
    match timing {
        TaxTiming::Before => subtotal_with_costs + ppn - pph,
        TaxTiming::After => dpp + ppn - pph,
    }
}

/// Run the full pipeline over a set of line items and a tax configuration.
///
/// Pure and synchronous; callers recompute on every relevant input change.
/// For quotations all tax fields are forced to zero and the grand total is
/// the subtotal with costs.
pub fn calculate(items: &[LineItem], config: &TaxConfig) -> DocumentTotals {
    let total_discount = total_discount(items);
    let subtotal = subtotal(items);
    let subtotal_with_costs = subtotal + config.additional_costs;

    if config.document_kind.suppresses_tax() {
        return DocumentTotals {
            total_discount,
            subtotal,
            subtotal_with_costs,
            dpp: Decimal::ZERO,
            ppn: Decimal::ZERO,
            pph: Decimal::ZERO,
            grand_total: subtotal_with_costs,
        };
    }

    let dpp = dpp(subtotal_with_costs, config.vat_rate, config.timing);
    let ppn = ppn(dpp, config.vat_rate);
    let pph = pph(subtotal_with_costs, dpp, ppn, config);
    let grand_total = grand_total(subtotal_with_costs, dpp, ppn, pph, config.timing);

    DocumentTotals {
        total_discount,
        subtotal,
        subtotal_with_costs,
        dpp,
        ppn,
        pph,
        grand_total,
    }
}
