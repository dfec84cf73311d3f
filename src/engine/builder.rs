use rust_decimal::Decimal;

use super::error::PajakError;
use super::types::*;

/// Builder for line items.
///
/// ```
/// use pajak::engine::*;
/// use rust_decimal_macros::dec;
///
/// let item = LineItemBuilder::new(dec!(10), dec!(100_000))
///     .discount_percent(dec!(10))
///     .returned(dec!(1))
///     .build();
///
/// assert_eq!(item.net(), dec!(900_000));
/// ```
pub struct LineItemBuilder {
    quantity: Decimal,
    unit_price: Decimal,
    return_quantity: Decimal,
    discount: Discount,
}

impl LineItemBuilder {
    pub fn new(quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            quantity,
            unit_price,
            return_quantity: Decimal::ZERO,
            discount: Discount::none(),
        }
    }

    /// Percentage discount on the line gross (0–100).
    pub fn discount_percent(mut self, value: Decimal) -> Self {
        self.discount = Discount::percent(value);
        self
    }

    /// Absolute rupiah discount.
    pub fn discount_amount(mut self, value: Decimal) -> Self {
        self.discount = Discount::amount(value);
        self
    }

    /// Units returned against this line.
    pub fn returned(mut self, quantity: Decimal) -> Self {
        self.return_quantity = quantity;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            quantity: self.quantity,
            unit_price: self.unit_price,
            return_quantity: self.return_quantity,
            discount: self.discount,
        }
    }
}

/// Builder for tax configuration.
///
/// ```
/// use pajak::engine::*;
/// use rust_decimal_macros::dec;
///
/// let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
///     .withholding(WithholdingKind::Pph23)
///     .additional_costs(dec!(150_000))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timing.label(), "Before Calculate");
/// ```
pub struct TaxConfigBuilder {
    timing: TaxTiming,
    vat_rate: VatRate,
    withholding: WithholdingKind,
    custom_rate: Decimal,
    additional_costs: Decimal,
    document_kind: DocumentKind,
    rounding: RoundingPolicy,
}

impl TaxConfigBuilder {
    pub fn new(timing: TaxTiming, vat_rate: VatRate) -> Self {
        Self {
            timing,
            vat_rate,
            withholding: WithholdingKind::Custom,
            custom_rate: Decimal::ZERO,
            additional_costs: Decimal::ZERO,
            document_kind: DocumentKind::Invoice,
            rounding: RoundingPolicy::default(),
        }
    }

    pub fn withholding(mut self, kind: WithholdingKind) -> Self {
        self.withholding = kind;
        self
    }

    /// Select custom withholding at the given percentage.
    pub fn custom_rate(mut self, rate: Decimal) -> Self {
        self.withholding = WithholdingKind::Custom;
        self.custom_rate = rate;
        self
    }

    pub fn additional_costs(mut self, costs: Decimal) -> Self {
        self.additional_costs = costs;
        self
    }

    pub fn document_kind(mut self, kind: DocumentKind) -> Self {
        self.document_kind = kind;
        self
    }

    pub fn rounding(mut self, policy: RoundingPolicy) -> Self {
        self.rounding = policy;
        self
    }

    pub fn build(self) -> Result<TaxConfig, PajakError> {
        if self.custom_rate.is_sign_negative() {
            return Err(PajakError::Builder(
                "custom withholding rate must not be negative".into(),
            ));
        }
        if self.additional_costs.is_sign_negative() {
            return Err(PajakError::Builder(
                "additional costs must not be negative".into(),
            ));
        }

        Ok(TaxConfig {
            timing: self.timing,
            vat_rate: self.vat_rate,
            withholding: self.withholding,
            custom_rate: self.custom_rate,
            additional_costs: self.additional_costs,
            document_kind: self.document_kind,
            rounding: self.rounding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builder_defaults_match_config_defaults() {
        let built = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
            .build()
            .unwrap();
        let default = TaxConfig::default();
        assert_eq!(built.withholding, default.withholding);
        assert_eq!(built.custom_rate, default.custom_rate);
        assert_eq!(built.rounding, default.rounding);
    }

    #[test]
    fn negative_custom_rate_rejected() {
        let result = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
            .custom_rate(dec!(-1))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn negative_additional_costs_rejected() {
        let result = TaxConfigBuilder::new(TaxTiming::After, VatRate::Twelve)
            .additional_costs(dec!(-100))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn custom_rate_selects_custom_withholding() {
        let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
            .withholding(WithholdingKind::Pph22)
            .custom_rate(dec!(2.5))
            .build()
            .unwrap();
        assert_eq!(config.withholding, WithholdingKind::Custom);
        assert_eq!(config.custom_rate, dec!(2.5));
    }
}
