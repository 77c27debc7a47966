//! Read-side filtering and pagination over assembled invoices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{ClientId, Invoice, InvoiceStatus, TenantId};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Listing filter. The tenant is mandatory; everything else narrows further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceQuery {
    pub tenant_id: TenantId,
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    /// Inclusive lower bound on invoice date.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on invoice date.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub include_deleted: bool,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl InvoiceQuery {
    pub fn new(tenant_id: impl Into<TenantId>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            status: None,
            client_id: None,
            date_from: None,
            date_to: None,
            include_deleted: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn client(mut self, client_id: impl Into<ClientId>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn include_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Whether `invoice` passes every filter in this query.
    pub fn matches(&self, invoice: &Invoice) -> bool {
        invoice.tenant_id == self.tenant_id
            && (self.include_deleted || !invoice.deleted)
            && self.status.is_none_or(|s| invoice.status == s)
            && self
                .client_id
                .as_ref()
                .is_none_or(|c| &invoice.client_id == c)
            && self.date_from.is_none_or(|d| invoice.date >= d)
            && self.date_to.is_none_or(|d| invoice.date <= d)
    }

    fn effective_page(&self) -> u32 {
        self.page.max(1)
    }

    fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches across all pages.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Filter, order and paginate `invoices`.
///
/// Ordering is date descending, then sequence descending, then prefix, so
/// equal dates still page deterministically.
pub fn list_invoices<'a>(
    invoices: impl IntoIterator<Item = &'a Invoice>,
    query: &InvoiceQuery,
) -> Page<&'a Invoice> {
    let mut matched: Vec<&Invoice> = invoices.into_iter().filter(|i| query.matches(i)).collect();
    matched.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.sequence.cmp(&a.sequence))
            .then_with(|| a.prefix.cmp(&b.prefix))
    });

    let page = query.effective_page();
    let page_size = query.effective_page_size();
    let total = matched.len() as u64;
    let total_pages = total.div_ceil(u64::from(page_size)) as u32;

    let start = (page as usize - 1).saturating_mul(page_size as usize);
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}
