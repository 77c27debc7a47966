use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{BahiError, Result};
use super::numbering::DEFAULT_PREFIX;
use super::types::*;

/// Everything needed to assemble one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub tenant_id: TenantId,
    pub tenant_jurisdiction: String,
    pub client_id: ClientId,
    pub client_jurisdiction: String,
    /// Counter prefix to draw the number from.
    pub prefix: String,
    pub lines: Vec<LineInput>,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Builder for [`InvoiceRequest`].
///
/// ```
/// use bahi::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let request = InvoiceRequestBuilder::new("acme", "Karnataka", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .client("globex", "Tamil Nadu")
///     .add_line(LineInput::new(dec!(10), dec!(150.00), dec!(18)).description("Consulting"))
///     .notes("Payable within 30 days")
///     .build()
///     .unwrap();
/// assert_eq!(request.prefix, "INV");
/// ```
pub struct InvoiceRequestBuilder {
    tenant_id: TenantId,
    tenant_jurisdiction: String,
    client: Option<(ClientId, String)>,
    prefix: String,
    lines: Vec<LineInput>,
    date: NaiveDate,
    notes: Option<String>,
}

impl InvoiceRequestBuilder {
    pub fn new(
        tenant_id: impl Into<TenantId>,
        tenant_jurisdiction: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            tenant_jurisdiction: tenant_jurisdiction.into(),
            client: None,
            prefix: DEFAULT_PREFIX.to_string(),
            lines: Vec::new(),
            date,
            notes: None,
        }
    }

    /// Start from stored tenant and client records.
    pub fn for_parties(tenant: &Tenant, client: &Client, date: NaiveDate) -> Self {
        Self::new(tenant.id.clone(), tenant.jurisdiction.clone(), date)
            .client(client.id.clone(), client.jurisdiction.clone())
    }

    pub fn client(
        mut self,
        client_id: impl Into<ClientId>,
        jurisdiction: impl Into<String>,
    ) -> Self {
        self.client = Some((client_id.into(), jurisdiction.into()));
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn add_line(mut self, line: LineInput) -> Self {
        self.lines.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = LineInput>) -> Self {
        self.lines.extend(lines);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Finish the request. Line contents are checked later, at assembly.
    pub fn build(self) -> Result<InvoiceRequest> {
        let (client_id, client_jurisdiction) = self
            .client
            .ok_or_else(|| BahiError::Validation("client is required".into()))?;

        Ok(InvoiceRequest {
            tenant_id: self.tenant_id,
            tenant_jurisdiction: self.tenant_jurisdiction,
            client_id,
            client_jurisdiction,
            prefix: self.prefix,
            lines: self.lines,
            date: self.date,
            notes: self.notes,
        })
    }
}
