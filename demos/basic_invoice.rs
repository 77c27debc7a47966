use chrono::NaiveDate;
use bahi::core::*;
use bahi::gst::{canonical_jurisdiction, validate_gstin};
use bahi::words::WordsStyle;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=bahi=debug shows allocation and assembly events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let gstin = validate_gstin("27AAPFU0939F1ZV").unwrap();
    let tenant = Tenant {
        id: TenantId::new("sahyadri"),
        name: "Sahyadri Traders".into(),
        registration_number: Some(gstin.to_string()),
        jurisdiction: gstin.state().into(),
    };
    let client = Client {
        id: ClientId::new("narmada"),
        tenant_id: tenant.id.clone(),
        name: "Narmada Exports".into(),
        registration_number: None,
        // Free-form input from a form field
        jurisdiction: canonical_jurisdiction(" gujarat").unwrap().into(),
    };

    let counters = InMemoryCounterStore::new();
    counters.provision(&tenant.id, "INV", 1001).unwrap();

    let assembler = InvoiceAssembler::new(&counters)
        .with_number_format(InvoiceNumberFormat::default().with_padding(6));

    let request = InvoiceRequestBuilder::for_parties(&tenant, &client, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .add_line(LineInput::new(dec!(40), dec!(125.50), dec!(18)).description("Steel brackets"))
        .add_line(LineInput::new(dec!(12), dec!(80), dec!(12)).description("Mounting kits"))
        .add_line(LineInput::new(dec!(1), dec!(450), dec!(5)).description("Freight"))
        .notes("Payable within 30 days")
        .build()
        .unwrap();

    let invoice = assembler.assemble(request).unwrap();
    let totals = invoice.breakdown.rounded(2);

    println!("Invoice {} ({:?}, {})", invoice.number, invoice.supply_type, invoice.status);
    for line in &invoice.lines {
        println!(
            "  {:>2}. {:<16} {:>6} x {:>8} @ {:>3}% = {:>10}  tax {:>8}",
            line.line_no,
            line.input.description.as_deref().unwrap_or("-"),
            line.input.quantity,
            line.input.rate,
            line.input.tax_rate,
            line.tax.amount,
            line.tax.tax_amount,
        );
    }
    println!("Subtotal: {}", totals.subtotal);
    println!("CGST:     {}", totals.cgst);
    println!("SGST:     {}", totals.sgst);
    println!("IGST:     {}", totals.igst);
    println!("Total:    {}", totals.total);
    println!("{}", invoice.total_in_words(&WordsStyle::default()).unwrap());

    println!("\nNext number: {}", counters.peek(&tenant.id, "INV").unwrap());
}
