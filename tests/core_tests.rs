use chrono::NaiveDate;
use bahi::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tenant() -> Tenant {
    Tenant {
        id: TenantId::new("T1"),
        name: "Sahyadri Traders".into(),
        registration_number: Some("27AAPFU0939F1ZV".into()),
        jurisdiction: "Maharashtra".into(),
    }
}

fn client(jurisdiction: &str) -> Client {
    Client {
        id: ClientId::new("C1"),
        tenant_id: TenantId::new("T1"),
        name: "Narmada Exports".into(),
        registration_number: None,
        jurisdiction: jurisdiction.into(),
    }
}

fn onboarded() -> InMemoryCounterStore {
    let store = InMemoryCounterStore::new();
    store.onboard(&TenantId::new("T1")).unwrap();
    store
}

// --- Tax apportionment ---

#[test]
fn intra_state_scenario() {
    let lines = [LineInput::new(dec!(2), dec!(100), dec!(18))];
    let b = compute_invoice(&lines, "Maharashtra", "Maharashtra");

    assert_eq!(b.subtotal, dec!(200));
    assert_eq!(b.cgst, dec!(18));
    assert_eq!(b.sgst, dec!(18));
    assert_eq!(b.igst, dec!(0));
    assert_eq!(b.cess, dec!(0));
    assert_eq!(b.total, dec!(236));
}

#[test]
fn inter_state_scenario() {
    let lines = [LineInput::new(dec!(2), dec!(100), dec!(18))];
    let b = compute_invoice(&lines, "Gujarat", "Maharashtra");

    assert_eq!(b.cgst, dec!(0));
    assert_eq!(b.sgst, dec!(0));
    assert_eq!(b.igst, dec!(36));
    assert_eq!(b.total, dec!(236));
}

#[test]
fn mixed_rates_sum_per_component() {
    let lines = [
        LineInput::new(dec!(10), dec!(150), dec!(18)),
        LineInput::new(dec!(1), dec!(49.90), dec!(5)),
        LineInput::new(dec!(3), dec!(20), dec!(0)),
    ];
    let b = compute_invoice(&lines, "Karnataka", "Karnataka");

    // 1500 + 49.90 + 60
    assert_eq!(b.subtotal, dec!(1609.90));
    // 270 + 2.495
    assert_eq!(b.cgst + b.sgst, dec!(272.495));
    assert_eq!(b.cgst, dec!(136.2475));
    assert_eq!(b.tax_total(), dec!(272.495));
    assert_eq!(b.total, dec!(1882.395));

    let rounded = b.rounded(2);
    assert_eq!(rounded.cgst, dec!(136.25));
    assert_eq!(rounded.sgst, dec!(136.25));
    assert_eq!(rounded.total, dec!(1882.40));
}

#[test]
fn jurisdictions_compared_exactly() {
    let lines = [LineInput::new(dec!(1), dec!(100), dec!(12))];
    let b = compute_invoice(&lines, "maharashtra", "Maharashtra");
    assert_eq!(b.igst, dec!(12));
    assert_eq!(b.cgst, Decimal::ZERO);
}

// --- Assembly ---

#[test]
fn assemble_intra_state_invoice() {
    let store = onboarded();
    let assembler = InvoiceAssembler::new(&store);

    let request = InvoiceRequestBuilder::for_parties(&tenant(), &client("Maharashtra"), date(2024, 6, 15))
        .add_line(LineInput::new(dec!(2), dec!(100), dec!(18)).description("Steel brackets"))
        .notes("Delivered to Pune warehouse")
        .build()
        .unwrap();
    let inv = assembler.assemble(request).unwrap();

    assert_eq!(inv.number, "INV-1");
    assert_eq!(inv.sequence, 1);
    assert_eq!(inv.prefix, "INV");
    assert_eq!(inv.status, InvoiceStatus::Draft);
    assert_eq!(inv.supply_type, SupplyType::IntraState);
    assert_eq!(inv.notes.as_deref(), Some("Delivered to Pune warehouse"));
    assert_eq!(inv.date, date(2024, 6, 15));

    let line = &inv.lines[0];
    assert_eq!(line.tax.amount, dec!(200));
    assert_eq!(line.tax.tax_amount, dec!(36));
    assert_eq!(line.tax.cgst, dec!(18));
    assert_eq!(line.tax.sgst, dec!(18));
    assert_eq!(line.tax.igst, dec!(0));

    assert_eq!(inv.breakdown.total, dec!(236));
}

#[test]
fn assemble_inter_state_invoice() {
    let store = onboarded();
    let assembler = InvoiceAssembler::new(&store);

    let request = InvoiceRequestBuilder::for_parties(&tenant(), &client("Gujarat"), date(2024, 6, 15))
        .add_line(LineInput::new(dec!(2), dec!(100), dec!(18)))
        .add_line(LineInput::new(dec!(1), dec!(50), dec!(12)))
        .build()
        .unwrap();
    let inv = assembler.assemble(request).unwrap();

    assert_eq!(inv.supply_type, SupplyType::InterState);
    assert!(inv.lines.iter().all(|l| l.tax.cgst.is_zero() && l.tax.sgst.is_zero()));
    assert_eq!(inv.breakdown.igst, dec!(42));
    assert_eq!(inv.breakdown.total, dec!(292));
}

#[test]
fn assembled_breakdown_matches_compute_invoice() {
    let store = onboarded();
    let lines = vec![
        LineInput::new(dec!(7), dec!(13.37), dec!(28)),
        LineInput::new(dec!(0.5), dec!(999), dec!(3)),
    ];
    let request = InvoiceRequestBuilder::for_parties(&tenant(), &client("Goa"), date(2024, 6, 15))
        .lines(lines.clone())
        .build()
        .unwrap();
    let inv = InvoiceAssembler::new(&store).assemble(request).unwrap();

    assert_eq!(inv.breakdown, compute_invoice(&lines, "Goa", "Maharashtra"));
}

#[test]
fn numbers_advance_per_tenant() {
    let store = onboarded();
    store.onboard(&TenantId::new("T2")).unwrap();
    let assembler = InvoiceAssembler::new(&store);

    let make = |tenant: &str| {
        InvoiceRequestBuilder::new(tenant, "Kerala", date(2024, 6, 15))
            .client("C1", "Kerala")
            .add_line(LineInput::new(dec!(1), dec!(10), dec!(5)))
            .build()
            .unwrap()
    };

    assert_eq!(assembler.assemble(make("T1")).unwrap().number, "INV-1");
    assert_eq!(assembler.assemble(make("T1")).unwrap().number, "INV-2");
    assert_eq!(assembler.assemble(make("T2")).unwrap().number, "INV-1");
    assert_eq!(assembler.assemble(make("T1")).unwrap().number, "INV-3");
}

#[test]
fn custom_prefix_and_padding() {
    let store = InMemoryCounterStore::new();
    store.provision(&TenantId::new("T1"), "MH", 41).unwrap();
    let assembler = InvoiceAssembler::new(&store)
        .with_number_format(InvoiceNumberFormat::default().with_padding(5));

    let request = InvoiceRequestBuilder::new("T1", "Maharashtra", date(2024, 6, 15))
        .client("C1", "Maharashtra")
        .prefix("MH")
        .add_line(LineInput::new(dec!(1), dec!(10), dec!(5)))
        .build()
        .unwrap();
    let inv = assembler.assemble(request).unwrap();
    assert_eq!(inv.number, "MH-00041");
    assert_eq!(inv.sequence, 41);
}

#[test]
fn unprovisioned_prefix_is_distinct_error() {
    let store = onboarded();
    let request = InvoiceRequestBuilder::new("T1", "Maharashtra", date(2024, 6, 15))
        .client("C1", "Maharashtra")
        .prefix("CN")
        .add_line(LineInput::new(dec!(1), dec!(10), dec!(5)))
        .build()
        .unwrap();
    let err = InvoiceAssembler::new(&store).assemble(request).unwrap_err();

    match err {
        BahiError::CounterNotFound { tenant_id, prefix } => {
            assert_eq!(tenant_id, TenantId::new("T1"));
            assert_eq!(prefix, "CN");
        }
        other => panic!("expected CounterNotFound, got {other:?}"),
    }
    assert!(
        InvoiceAssembler::new(&store)
            .counters()
            .peek(&TenantId::new("T1"), "CN")
            .is_err()
    );
}

#[test]
fn validation_reports_all_problems_and_keeps_counter() {
    let store = onboarded();
    let request = InvoiceRequestBuilder::new("T1", "Maharashtra", date(2024, 6, 15))
        .client("C1", "")
        .add_line(LineInput::new(dec!(-1), dec!(0), dec!(18)))
        .build()
        .unwrap();
    let err = InvoiceAssembler::new(&store).assemble(request).unwrap_err();

    let BahiError::Validation(msg) = err else {
        panic!("expected validation error");
    };
    assert!(msg.contains("client_jurisdiction"));
    assert!(msg.contains("lines[0].quantity"));
    assert!(msg.contains("lines[0].rate"));
    assert!(!msg.contains("tax_rate"));
    assert_eq!(store.peek(&TenantId::new("T1"), "INV").unwrap(), 1);
}

#[test]
fn status_transitions_are_unconstrained() {
    let store = onboarded();
    let request = InvoiceRequestBuilder::new("T1", "Maharashtra", date(2024, 6, 15))
        .client("C1", "Maharashtra")
        .add_line(LineInput::new(dec!(1), dec!(10), dec!(5)))
        .build()
        .unwrap();
    let mut inv = InvoiceAssembler::new(&store).assemble(request).unwrap();

    inv.set_status(InvoiceStatus::Paid);
    inv.set_status(InvoiceStatus::Draft);
    inv.set_status(InvoiceStatus::Cancelled);
    inv.set_status(InvoiceStatus::Sent);
    assert_eq!(inv.status, InvoiceStatus::Sent);

    inv.mark_deleted();
    assert!(inv.deleted);
    inv.restore();
    assert!(!inv.deleted);
}

#[cfg(feature = "words")]
#[test]
fn invoice_total_in_words() {
    let store = onboarded();
    let request = InvoiceRequestBuilder::new("T1", "Maharashtra", date(2024, 6, 15))
        .client("C1", "Maharashtra")
        .add_line(LineInput::new(dec!(2), dec!(100), dec!(18)))
        .build()
        .unwrap();
    let inv = InvoiceAssembler::new(&store).assemble(request).unwrap();

    assert_eq!(
        inv.total_in_words(&bahi::words::WordsStyle::default()).unwrap(),
        "Rupees Two Hundred Thirty Six Only"
    );
}

#[test]
fn invoice_serializes_with_lowercase_status() {
    let store = onboarded();
    let request = InvoiceRequestBuilder::new("T1", "Maharashtra", date(2024, 6, 15))
        .client("C1", "Gujarat")
        .add_line(LineInput::new(dec!(2), dec!(100), dec!(18)))
        .build()
        .unwrap();
    let inv = InvoiceAssembler::new(&store).assemble(request).unwrap();

    let json = serde_json::to_value(&inv).unwrap();
    assert_eq!(json["status"], "draft");
    assert_eq!(json["supply_type"], "inter_state");
    assert_eq!(json["number"], "INV-1");
    let igst: Decimal = json["breakdown"]["igst"].as_str().unwrap().parse().unwrap();
    assert_eq!(igst, dec!(36));
    assert_eq!(json["lines"][0]["line_no"], 1);

    let back: Invoice = serde_json::from_value(json).unwrap();
    assert_eq!(back, inv);
}
