//! # bahi
//!
//! Financial core for GST invoicing: apportioning tax between CGST/SGST and
//! IGST, allocating per-tenant invoice numbers under concurrency, and writing
//! invoice totals out in Indian-numbering-system words.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Persistence, transport and rendering belong to the host; the core takes
//! plain data in and hands computed results back.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use bahi::core::*;
//! use rust_decimal_macros::dec;
//!
//! let counters = InMemoryCounterStore::new();
//! let tenant = TenantId::new("acme");
//! counters.onboard(&tenant).unwrap();
//!
//! let assembler = InvoiceAssembler::new(&counters);
//! let request = InvoiceRequestBuilder::new(tenant.clone(), "Maharashtra", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .client(ClientId::new("globex"), "Maharashtra")
//!     .add_line(LineInput::new(dec!(2), dec!(100), dec!(18)))
//!     .build()
//!     .unwrap();
//!
//! let invoice = assembler.assemble(request).unwrap();
//! assert_eq!(invoice.number, "INV-1");
//! assert_eq!(invoice.breakdown.cgst, dec!(18));
//! assert_eq!(invoice.breakdown.total, dec!(236));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Tax apportionment, invoice numbering, assembly, listing |
//! | `gst` | GSTIN validation, GST state codes, jurisdiction normalization |
//! | `words` | Amount in words (crore/lakh/thousand) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "gst")]
pub mod gst;

#[cfg(feature = "words")]
pub mod words;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
