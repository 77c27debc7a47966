use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tenant (company account) identifier. Every other entity is scoped to one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Client identifier, unique within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Company account that issues invoices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    /// GSTIN, when registered.
    pub registration_number: Option<String>,
    /// Jurisdiction ("state") code used for place-of-supply decisions.
    pub jurisdiction: String,
}

/// Customer of a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub tenant_id: TenantId,
    pub name: String,
    /// GSTIN, when the client is a registered business.
    pub registration_number: Option<String>,
    /// Jurisdiction ("state") code compared against the tenant's.
    pub jurisdiction: String,
}

/// Invoice line as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    /// Item name or free-text description.
    pub description: Option<String>,
    /// Invoiced quantity (> 0).
    pub quantity: Decimal,
    /// Unit rate in currency units (> 0).
    pub rate: Decimal,
    /// GST rate percentage, 0 to 100.
    pub tax_rate: Decimal,
}

impl LineInput {
    pub fn new(quantity: Decimal, rate: Decimal, tax_rate: Decimal) -> Self {
        Self {
            description: None,
            quantity,
            rate,
            tax_rate,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Whether a supply stays inside one jurisdiction or crosses into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    /// Same jurisdiction: CGST + SGST.
    IntraState,
    /// Different jurisdictions: IGST.
    InterState,
}

impl SupplyType {
    /// Compare jurisdiction codes exactly. No case or whitespace folding.
    pub fn between(client_jurisdiction: &str, tenant_jurisdiction: &str) -> Self {
        if client_jurisdiction != tenant_jurisdiction {
            Self::InterState
        } else {
            Self::IntraState
        }
    }

    pub fn is_inter_state(&self) -> bool {
        matches!(self, Self::InterState)
    }
}

/// Per-line tax computation, carried at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineTax {
    /// quantity * rate.
    pub amount: Decimal,
    /// amount * tax_rate / 100.
    pub tax_amount: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

/// A caller line together with its computed tax columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedLine {
    /// 1-based position in the invoice.
    pub line_no: u32,
    #[serde(flatten)]
    pub input: LineInput,
    #[serde(flatten)]
    pub tax: LineTax,
}

/// Invoice-level totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Sum of line amounts before tax.
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    /// Reserved; always zero.
    pub cess: Decimal,
    /// subtotal + cgst + sgst + igst.
    pub total: Decimal,
}

impl TaxBreakdown {
    /// All tax components together.
    pub fn tax_total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst + self.cess
    }

    /// Round every component half-up to `dp` places.
    ///
    /// The total is re-derived from the rounded components so the rounded
    /// breakdown always adds up.
    pub fn rounded(&self, dp: u32) -> Self {
        let subtotal = super::tax::round_half_up(self.subtotal, dp);
        let cgst = super::tax::round_half_up(self.cgst, dp);
        let sgst = super::tax::round_half_up(self.sgst, dp);
        let igst = super::tax::round_half_up(self.igst, dp);
        let cess = super::tax::round_half_up(self.cess, dp);
        Self {
            subtotal,
            cgst,
            sgst,
            igst,
            cess,
            total: subtotal + cgst + sgst + igst + cess,
        }
    }
}

/// Invoice lifecycle status. Transitions are driven by the host and are not
/// restricted: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown invoice status '{other}'")),
        }
    }
}

/// Fully computed invoice, ready for the host to persist or render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub tenant_id: TenantId,
    pub client_id: ClientId,
    /// Counter prefix the number was drawn from (e.g. "INV").
    pub prefix: String,
    /// Raw value allocated from the counter.
    pub sequence: u64,
    /// Externally visible invoice number (e.g. "INV-42").
    pub number: String,
    pub date: NaiveDate,
    pub supply_type: SupplyType,
    pub lines: Vec<ComputedLine>,
    pub breakdown: TaxBreakdown,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
    /// Soft-delete marker. Deleted invoices are kept but hidden from listings.
    #[serde(default)]
    pub deleted: bool,
}

impl Invoice {
    /// Move to any status. No transition is forbidden.
    pub fn set_status(&mut self, status: InvoiceStatus) {
        self.status = status;
    }

    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    pub fn restore(&mut self) {
        self.deleted = false;
    }

    /// Grand total written out for statutory invoice text.
    #[cfg(feature = "words")]
    pub fn total_in_words(&self, style: &crate::words::WordsStyle) -> super::Result<String> {
        style.format(self.breakdown.total)
    }
}
