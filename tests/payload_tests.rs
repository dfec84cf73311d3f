use pajak::engine::*;
use pajak::payload::SubmissionPayload;
use rust_decimal_macros::dec;
use serde_json::json;

fn sample_totals() -> (DocumentTotals, TaxConfig) {
    let items = vec![LineItemBuilder::new(dec!(10), dec!(100_000))
        .discount_percent(dec!(10))
        .build()];
    let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
        .build()
        .unwrap();
    (calculate(&items, &config), config)
}

#[test]
fn payload_serializes_decimals_as_strings() {
    let (totals, config) = sample_totals();
    let payload = SubmissionPayload::new(&totals, &config);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "dpp": "900000",
            "ppn": "99000",
            "pph": "0",
            "total": "900000",
            "grand_total": "999000",
            "tax_method": "Before Calculate",
            "ppn_percentage": "11",
            "pph_type": "Custom",
            "pph_percentage": "0",
        })
    );
}

#[test]
fn after_calculate_method_label() {
    let items = vec![LineItem::new(dec!(1), dec!(1_110_000))];
    let config = TaxConfigBuilder::new(TaxTiming::After, VatRate::Eleven)
        .build()
        .unwrap();
    let totals = calculate(&items, &config);
    let payload = SubmissionPayload::new(&totals, &config);

    assert_eq!(payload.tax_method, "After Calculate");
    assert_eq!(payload.dpp, dec!(1_000_000));
    assert_eq!(payload.grand_total, dec!(1_110_000));
}

#[test]
fn quotation_payload_carries_zero_tax_fields() {
    let items = vec![LineItem::new(dec!(2), dec!(300_000))];
    let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Twelve)
        .withholding(WithholdingKind::Pph23)
        .document_kind(DocumentKind::Quotation)
        .build()
        .unwrap();
    let totals = calculate(&items, &config);
    let payload = SubmissionPayload::new(&totals, &config);

    assert_eq!(payload.dpp, dec!(0));
    assert_eq!(payload.ppn, dec!(0));
    assert_eq!(payload.pph, dec!(0));
    assert_eq!(payload.total, dec!(600_000));
    assert_eq!(payload.grand_total, dec!(600_000));
    // Config fields still describe what the form had selected.
    assert_eq!(payload.ppn_percentage, dec!(12));
    assert_eq!(payload.pph_type, "PPh 23");
}
