use chrono::NaiveDate;
use bahi::core::*;
use bahi::gst::validate_gstin;
use bahi::words::amount_in_words;
use rust_decimal_macros::dec;

fn main() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let counters = InMemoryCounterStore::new();
    let tenant = TenantId::new("acme");
    counters.onboard(&tenant).unwrap();
    let assembler = InvoiceAssembler::new(&counters);

    // ── 1. Builder error: no client ───────────────────────────────────
    println!("=== Builder Error ===");
    match InvoiceRequestBuilder::new(tenant.clone(), "Karnataka", date)
        .add_line(LineInput::new(dec!(1), dec!(100), dec!(18)))
        .build()
    {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Build failed: {e}"),
    }

    // ── 2. Validation errors are collected, no number consumed ────────
    println!("\n=== Validation Errors ===");
    let request = InvoiceRequestBuilder::new(tenant.clone(), "Karnataka", date)
        .client("globex", "")
        .add_line(LineInput::new(dec!(0), dec!(100), dec!(18)))
        .add_line(LineInput::new(dec!(2), dec!(-5), dec!(140)))
        .build()
        .unwrap();
    match assembler.assemble(request) {
        Ok(inv) => println!("  unexpected invoice {}", inv.number),
        Err(e) => {
            println!("  Rejected: {e}");
            println!("  Retryable: {}", e.is_retryable());
        }
    }
    println!("  Next number still: {}", counters.peek(&tenant, "INV").unwrap());

    // ── 3. Missing counter ────────────────────────────────────────────
    println!("\n=== Counter Not Found ===");
    let request = InvoiceRequestBuilder::new(tenant.clone(), "Karnataka", date)
        .client("globex", "Karnataka")
        .prefix("CN")
        .add_line(LineInput::new(dec!(1), dec!(100), dec!(18)))
        .build()
        .unwrap();
    match assembler.assemble(request) {
        Err(BahiError::CounterNotFound { tenant_id, prefix }) => {
            println!("  No counter for {tenant_id}/{prefix}, provisioning it");
            counters.provision(&tenant_id, &prefix, 1).unwrap();
        }
        other => println!("  unexpected: {other:?}"),
    }

    // ── 4. GSTIN and words ────────────────────────────────────────────
    println!("\n=== GSTIN ===");
    for gstin in ["29AAGCB7383J1Z4", "29AAGCB7383J1Z5", "99XYZ"] {
        match validate_gstin(gstin) {
            Ok(g) => println!("  {g}: valid ({})", g.state()),
            Err(e) => println!("  {e}"),
        }
    }

    println!("\n=== Amount in Words ===");
    match amount_in_words(dec!(-10), "Rupees", "Paise") {
        Ok(s) => println!("  {s}"),
        Err(e) => println!("  {e}"),
    }
}
