//! GST apportionment between CGST/SGST (intra-state) and IGST (inter-state).
//!
//! These functions perform no bounds checking and return no errors. Range
//! checks on quantity, rate and tax rate belong to
//! [`validate_lines`](super::validate_lines), which also caps each line at
//! [`MAX_LINE_AMOUNT`](super::MAX_LINE_AMOUNT) so the arithmetic here cannot
//! leave `Decimal`'s range.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{LineInput, LineTax, SupplyType, TaxBreakdown};

/// Compute one line's amount and tax columns.
///
/// Nothing is rounded here; rounding is a storage/display decision made by
/// the caller (see [`TaxBreakdown::rounded`]).
///
/// # Panics
///
/// If `quantity * rate` overflows `Decimal`. Validated lines never do.
pub fn compute_line(
    quantity: Decimal,
    rate: Decimal,
    tax_rate: Decimal,
    is_inter_state: bool,
) -> LineTax {
    let amount = quantity * rate;
    let tax_amount = amount * tax_rate / dec!(100);

    if is_inter_state {
        LineTax {
            amount,
            tax_amount,
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: tax_amount,
        }
    } else {
        let half = tax_amount / dec!(2);
        LineTax {
            amount,
            tax_amount,
            cgst: half,
            sgst: half,
            igst: Decimal::ZERO,
        }
    }
}

/// Compute invoice totals for `lines`.
///
/// The supply is inter-state whenever the two jurisdiction codes differ as
/// plain strings.
pub fn compute_invoice(
    lines: &[LineInput],
    client_jurisdiction: &str,
    tenant_jurisdiction: &str,
) -> TaxBreakdown {
    let supply = SupplyType::between(client_jurisdiction, tenant_jurisdiction);
    let taxes: Vec<LineTax> = lines
        .iter()
        .map(|l| compute_line(l.quantity, l.rate, l.tax_rate, supply.is_inter_state()))
        .collect();
    aggregate(&taxes)
}

/// Sum already computed line taxes into a breakdown.
pub fn aggregate<'a>(taxes: impl IntoIterator<Item = &'a LineTax>) -> TaxBreakdown {
    let mut breakdown = TaxBreakdown::default();
    for t in taxes {
        breakdown.subtotal += t.amount;
        breakdown.cgst += t.cgst;
        breakdown.sgst += t.sgst;
        breakdown.igst += t.igst;
    }
    breakdown.cess = Decimal::ZERO;
    breakdown.total = breakdown.subtotal + breakdown.cgst + breakdown.sgst + breakdown.igst;
    breakdown
}

/// Round half away from zero to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
