use rust_decimal_macros::dec;

use super::error::{PajakError, ValidationError};
use super::types::*;

/// Validate calculation inputs before running the pipeline.
/// Returns all findings (not just the first).
///
/// Validation is advisory: the calculation functions stay total over whatever
/// they are given (discounts are capped, subtotals floored), but forms should
/// surface these findings to the user instead of silently clamping.
pub fn validate_inputs(items: &[LineItem], config: &TaxConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one line item is required",
        ));
    }

    for (i, item) in items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    if config.additional_costs.is_sign_negative() {
        errors.push(ValidationError::new(
            "config.additional_costs",
            "additional costs must not be negative",
        ));
    }

    if config.withholding == WithholdingKind::Custom && config.custom_rate.is_sign_negative() {
        errors.push(ValidationError::new(
            "config.custom_rate",
            "custom withholding rate must not be negative",
        ));
    }

    errors
}

/// Validate and fail with all findings joined into one error.
pub fn ensure_valid(items: &[LineItem], config: &TaxConfig) -> Result<(), PajakError> {
    let errors = validate_inputs(items, config);
    if errors.is_empty() {
        Ok(())
    } else {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(PajakError::Validation(msg))
    }
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.quantity.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if item.unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }

    if item.return_quantity.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.return_quantity"),
            "return quantity must not be negative",
        ));
    } else if !item.quantity.is_sign_negative() && item.return_quantity > item.quantity {
        errors.push(ValidationError::new(
            format!("{prefix}.return_quantity"),
            format!(
                "return quantity {} exceeds ordered quantity {}",
                item.return_quantity, item.quantity
            ),
        ));
    }

    if item.discount.value.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.discount.value"),
            "discount value must not be negative",
        ));
    } else if item.discount.mode == DiscountMode::Percent && item.discount.value > dec!(100) {
        errors.push(ValidationError::new(
            format!("{prefix}.discount.value"),
            format!(
                "percent discount {} exceeds 100 and will be capped at the line gross",
                item.discount.value
            ),
        ));
    }
}
