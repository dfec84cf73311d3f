use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchase or sales line as entered in an item form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Ordered quantity (whole units in practice).
    pub quantity: Decimal,
    /// Price per unit in whole rupiah.
    pub unit_price: Decimal,
    /// Units returned — reduces the effective quantity at the same unit price.
    pub return_quantity: Decimal,
    /// Line-level discount.
    pub discount: Discount,
}

impl LineItem {
    /// Line item with no return and no discount.
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            return_quantity: Decimal::ZERO,
            discount: Discount::none(),
        }
    }

    /// Gross amount before returns and discounts: quantity × unit price.
    pub fn gross(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Net amount after returns: (quantity − return_quantity) × unit price.
    pub fn net(&self) -> Decimal {
        (self.quantity - self.return_quantity) * self.unit_price
    }
}

/// Line-level discount, either a percentage of gross or an absolute amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    pub mode: DiscountMode,
    /// 0–100 for [`DiscountMode::Percent`], whole rupiah for
    /// [`DiscountMode::Amount`].
    pub value: Decimal,
}

impl Discount {
    pub fn none() -> Self {
        Self {
            mode: DiscountMode::Amount,
            value: Decimal::ZERO,
        }
    }

    pub fn percent(value: Decimal) -> Self {
        Self {
            mode: DiscountMode::Percent,
            value,
        }
    }

    pub fn amount(value: Decimal) -> Self {
        Self {
            mode: DiscountMode::Amount,
            value,
        }
    }
}

/// How a line discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountMode {
    /// Value is a percentage of the line gross (0–100).
    Percent,
    /// Value is an absolute rupiah amount.
    Amount,
}

/// Whether the entered subtotal is tax-exclusive or tax-inclusive.
///
/// `Before`: tax is added on top of the subtotal. `After`: the subtotal
/// already contains PPN and the tax base is backed out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxTiming {
    Before,
    After,
}

impl TaxTiming {
    /// Wire label used by the purchases/sales API.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Before => "Before Calculate",
            Self::After => "After Calculate",
        }
    }

    /// Parse from the wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Before Calculate" => Some(Self::Before),
            "After Calculate" => Some(Self::After),
            _ => None,
        }
    }
}

/// Statutory PPN rate. Indonesia moved from 11% to 12% under the HPP law
/// transition; both rates remain selectable per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatRate {
    Eleven,
    Twelve,
}

impl VatRate {
    /// Rate as a percentage value.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Eleven => Decimal::new(11, 0),
            Self::Twelve => Decimal::new(12, 0),
        }
    }

    /// Parse from a whole-number percentage.
    pub fn from_percent(percent: u8) -> Option<Self> {
        match percent {
            11 => Some(Self::Eleven),
            12 => Some(Self::Twelve),
            _ => None,
        }
    }
}

/// Which withholding income tax applies to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithholdingKind {
    /// PPh 22 — goods purchases, bracketed on DPP.
    Pph22,
    /// PPh 23 — services, 2% of a VAT-grossed base.
    Pph23,
    /// Free-form rate applied to DPP.
    Custom,
}

impl WithholdingKind {
    /// Wire label used by the purchases/sales API (`pph_type`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pph22 => "PPh 22",
            Self::Pph23 => "PPh 23",
            Self::Custom => "Custom",
        }
    }

    /// Parse from the wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "PPh 22" => Some(Self::Pph22),
            "PPh 23" => Some(Self::Pph23),
            "Custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Document variant the totals are computed for.
///
/// Quotations never carry tax: DPP, PPN, and PPh are forced to zero and the
/// grand total equals the subtotal with costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Invoice,
    Quotation,
    Request,
    Shipment,
    Order,
}

impl DocumentKind {
    /// True when tax must be suppressed entirely.
    pub fn suppresses_tax(&self) -> bool {
        matches!(self, Self::Quotation)
    }
}

/// Rounding applied to the custom withholding amount.
///
/// PPh 22 and PPh 23 always round half-up to whole rupiah; legacy forms were
/// inconsistent about rounding custom rates, so the policy is explicit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Round half-up to whole rupiah at the end (default).
    WholeUnit,
    /// Keep the exact decimal result.
    Exact,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::WholeUnit
    }
}

/// Tax configuration for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxConfig {
    pub timing: TaxTiming,
    pub vat_rate: VatRate,
    pub withholding: WithholdingKind,
    /// Percentage used only when `withholding` is [`WithholdingKind::Custom`].
    pub custom_rate: Decimal,
    /// Freight + insurance, added to the subtotal before tax base derivation.
    /// Never discounted.
    pub additional_costs: Decimal,
    pub document_kind: DocumentKind,
    pub rounding: RoundingPolicy,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            timing: TaxTiming::Before,
            vat_rate: VatRate::Eleven,
            withholding: WithholdingKind::Custom,
            custom_rate: Decimal::ZERO,
            additional_costs: Decimal::ZERO,
            document_kind: DocumentKind::Invoice,
            rounding: RoundingPolicy::default(),
        }
    }
}

/// Computed document totals. Derived on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of per-line discounts.
    pub total_discount: Decimal,
    /// Net of returns and discounts, floored at zero.
    pub subtotal: Decimal,
    /// Subtotal plus additional costs.
    pub subtotal_with_costs: Decimal,
    /// Dasar Pengenaan Pajak — the tax base.
    pub dpp: Decimal,
    /// Value-added tax.
    pub ppn: Decimal,
    /// Withholding income tax.
    pub pph: Decimal,
    pub grand_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn timing_labels_round_trip() {
        for timing in [TaxTiming::Before, TaxTiming::After] {
            assert_eq!(TaxTiming::from_label(timing.label()), Some(timing));
        }
        assert_eq!(TaxTiming::from_label("Sometime"), None);
    }

    #[test]
    fn withholding_labels_round_trip() {
        for kind in [
            WithholdingKind::Pph22,
            WithholdingKind::Pph23,
            WithholdingKind::Custom,
        ] {
            assert_eq!(WithholdingKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn vat_rate_from_percent() {
        assert_eq!(VatRate::from_percent(11), Some(VatRate::Eleven));
        assert_eq!(VatRate::from_percent(12), Some(VatRate::Twelve));
        assert_eq!(VatRate::from_percent(10), None);
    }

    #[test]
    fn line_net_subtracts_returns_at_same_price() {
        let mut item = LineItem::new(dec!(10), dec!(100_000));
        item.return_quantity = dec!(3);
        assert_eq!(item.gross(), dec!(1_000_000));
        assert_eq!(item.net(), dec!(700_000));
    }

    #[test]
    fn only_quotation_suppresses_tax() {
        assert!(DocumentKind::Quotation.suppresses_tax());
        for kind in [
            DocumentKind::Invoice,
            DocumentKind::Request,
            DocumentKind::Shipment,
            DocumentKind::Order,
        ] {
            assert!(!kind.suppresses_tax());
        }
    }
}
