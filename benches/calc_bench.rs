use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pajak::engine::*;
use rust_decimal_macros::dec;

fn items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItemBuilder::new(dec!(10), dec!(100_000) + rust_decimal::Decimal::from(i as u32))
                .discount_percent(dec!(5))
                .build()
        })
        .collect()
}

fn bench_calculate(c: &mut Criterion) {
    let config = TaxConfigBuilder::new(TaxTiming::Before, VatRate::Eleven)
        .withholding(WithholdingKind::Pph23)
        .additional_costs(dec!(250_000))
        .build()
        .unwrap();

    for count in [1usize, 20, 200] {
        let set = items(count);
        c.bench_function(&format!("calculate_{count}_items"), |b| {
            b.iter(|| calculate(black_box(&set), black_box(&config)))
        });
    }
}

fn bench_line_discount(c: &mut Criterion) {
    let item = LineItemBuilder::new(dec!(10), dec!(100_000))
        .discount_percent(dec!(10))
        .build();
    c.bench_function("line_discount", |b| {
        b.iter(|| line_discount(black_box(&item)))
    });
}

criterion_group!(benches, bench_calculate, bench_line_discount);
criterion_main!(benches);
