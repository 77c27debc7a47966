use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::builder::InvoiceRequest;
use super::error::ValidationError;
use super::types::LineInput;

/// Upper bound on lines per invoice.
pub const MAX_LINES: usize = 10_000;

/// Upper bound on counter prefix length.
pub const MAX_PREFIX_LEN: usize = 20;

/// Upper bound on `quantity * rate` for one line.
///
/// With tax at most 100% and at most [`MAX_LINES`] lines, every line amount,
/// tax column and invoice total stays inside `Decimal`'s range.
pub const MAX_LINE_AMOUNT: Decimal = dec!(1000000000000000000);

/// Validate invoice lines before any tax is computed.
/// Returns all validation errors found (not just the first).
pub fn validate_lines(lines: &[LineInput]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if lines.is_empty() {
        errors.push(ValidationError::new(
            "lines",
            "at least one line item is required",
        ));
        return errors;
    }

    if lines.len() > MAX_LINES {
        errors.push(ValidationError::new(
            "lines",
            format!("invoice cannot have more than {MAX_LINES} line items"),
        ));
    }

    for (i, line) in lines.iter().enumerate() {
        let field = |name: &str| format!("lines[{i}].{name}");

        if line.quantity <= Decimal::ZERO {
            errors.push(ValidationError::new(
                field("quantity"),
                format!("quantity must be positive, got {}", line.quantity),
            ));
        }
        if line.rate <= Decimal::ZERO {
            errors.push(ValidationError::new(
                field("rate"),
                format!("rate must be positive, got {}", line.rate),
            ));
        }
        if line.quantity > Decimal::ZERO && line.rate > Decimal::ZERO {
            let within = line
                .quantity
                .checked_mul(line.rate)
                .is_some_and(|amount| amount <= MAX_LINE_AMOUNT);
            if !within {
                errors.push(ValidationError::new(
                    field("rate"),
                    format!("quantity * rate cannot exceed {MAX_LINE_AMOUNT}"),
                ));
            }
        }
        if line.tax_rate < Decimal::ZERO || line.tax_rate > dec!(100) {
            errors.push(ValidationError::new(
                field("tax_rate"),
                format!("tax rate must be between 0 and 100, got {}", line.tax_rate),
            ));
        }
    }

    errors
}

/// Validate a whole creation request: prefix, jurisdictions and lines.
pub fn validate_request(request: &InvoiceRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let prefix = request.prefix.trim();
    if prefix.is_empty() {
        errors.push(ValidationError::new("prefix", "prefix must not be empty"));
    } else if prefix.len() > MAX_PREFIX_LEN {
        errors.push(ValidationError::new(
            "prefix",
            format!("prefix cannot exceed {MAX_PREFIX_LEN} characters"),
        ));
    }

    if request.tenant_jurisdiction.trim().is_empty() {
        errors.push(ValidationError::new(
            "tenant_jurisdiction",
            "tenant jurisdiction must not be empty",
        ));
    }
    if request.client_jurisdiction.trim().is_empty() {
        errors.push(ValidationError::new(
            "client_jurisdiction",
            "client jurisdiction must not be empty",
        ));
    }

    errors.extend(validate_lines(&request.lines));
    errors
}
