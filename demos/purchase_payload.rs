use pajak::engine::*;
use pajak::input;
use pajak::payload::SubmissionPayload;

fn main() {
    // Values as they arrive from form fields, including a comma-separated
    // custom withholding rate.
    let quantity = input::parse_quantity("12");
    let unit_price = input::parse_amount("850000");
    let custom_rate = input::parse_rate("2,65");

    let items = vec![LineItemBuilder::new(quantity, unit_price)
        .discount_amount(input::parse_amount("200000"))
        .build()];
    let config = TaxConfigBuilder::new(TaxTiming::After, VatRate::Twelve)
        .custom_rate(custom_rate)
        .build()
        .expect("config should be valid");

    let totals = calculate(&items, &config);
    let payload = SubmissionPayload::new(&totals, &config);

    // The form submitter folds these fields into its multipart request.
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).expect("payload serializes")
    );
}
