use pajak::engine::*;
use rust_decimal_macros::dec;

fn main() {
    // A purchase of goods with a discounted line and a returned unit,
    // 11% PPN added on top, no withholding.
    let items = vec![
        LineItemBuilder::new(dec!(10), dec!(100_000))
            .discount_percent(dec!(10))
            .build(),
        LineItemBuilder::new(dec!(4), dec!(250_000))
            .returned(dec!(1))
            .build(),
    ];
    let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
        .additional_costs(dec!(75_000))
        .build()
        .expect("config should be valid");

    let findings = validate_inputs(&items, &config);
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");

    let totals = calculate(&items, &config);

    println!("Discount:    Rp {}", totals.total_discount);
    println!("Subtotal:    Rp {}", totals.subtotal);
    println!("With costs:  Rp {}", totals.subtotal_with_costs);
    println!("---");
    println!("DPP:         Rp {}", totals.dpp);
    println!("PPN (11%):   Rp {}", totals.ppn);
    println!("PPh:         Rp {}", totals.pph);
    println!("---");
    println!("Grand total: Rp {}", totals.grand_total);
}
