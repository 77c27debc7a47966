//! Turns an [`InvoiceRequest`] into a fully computed [`Invoice`].

use super::builder::InvoiceRequest;
use super::error::Result;
use super::numbering::{CounterStore, InvoiceNumberFormat};
use super::tax::{aggregate, compute_line};
use super::types::{ComputedLine, Invoice, InvoiceStatus, SupplyType};
use super::validation::validate_request;

/// Assembles invoices: validation, tax computation, then number allocation.
///
/// The number is drawn last, so a request rejected by validation never
/// consumes one. If the host fails to persist the returned invoice, the
/// allocated number stays consumed; that gap is accepted.
#[derive(Debug, Clone)]
pub struct InvoiceAssembler<S> {
    counters: S,
    number_format: InvoiceNumberFormat,
}

impl<S: CounterStore> InvoiceAssembler<S> {
    pub fn new(counters: S) -> Self {
        Self {
            counters,
            number_format: InvoiceNumberFormat::default(),
        }
    }

    pub fn with_number_format(mut self, format: InvoiceNumberFormat) -> Self {
        self.number_format = format;
        self
    }

    pub fn number_format(&self) -> &InvoiceNumberFormat {
        &self.number_format
    }

    pub fn counters(&self) -> &S {
        &self.counters
    }

    /// Validate, compute and number a new draft invoice.
    pub fn assemble(&self, request: InvoiceRequest) -> Result<Invoice> {
        let errors = validate_request(&request);
        if !errors.is_empty() {
            tracing::debug!(
                tenant_id = %request.tenant_id,
                errors = errors.len(),
                "invoice request rejected"
            );
            return Err(errors.into());
        }

        // One decision for the whole invoice; lines are never split.
        let supply = SupplyType::between(&request.client_jurisdiction, &request.tenant_jurisdiction);

        let lines: Vec<ComputedLine> = request
            .lines
            .into_iter()
            .zip(1u32..)
            .map(|(input, line_no)| {
                let tax = compute_line(
                    input.quantity,
                    input.rate,
                    input.tax_rate,
                    supply.is_inter_state(),
                );
                ComputedLine {
                    line_no,
                    input,
                    tax,
                }
            })
            .collect();
        let breakdown = aggregate(lines.iter().map(|l| &l.tax));

        let prefix = request.prefix.trim().to_string();
        let sequence = self.counters.allocate(&request.tenant_id, &prefix)?;
        let number = self.number_format.format(&prefix, sequence);

        tracing::debug!(
            tenant_id = %request.tenant_id,
            number = %number,
            lines = lines.len(),
            total = %breakdown.total,
            "assembled invoice"
        );

        Ok(Invoice {
            tenant_id: request.tenant_id,
            client_id: request.client_id,
            prefix,
            sequence,
            number,
            date: request.date,
            supply_type: supply,
            lines,
            breakdown,
            status: InvoiceStatus::Draft,
            notes: request.notes,
            deleted: false,
        })
    }
}
