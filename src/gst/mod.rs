//! GST registration helpers: GSTIN validation and state codes.
//!
//! # Example
//!
//! ```
//! use bahi::gst::*;
//!
//! let gstin = validate_gstin("27AAPFU0939F1ZV").unwrap();
//! assert_eq!(gstin.state(), "Maharashtra");
//!
//! // Normalize free-form jurisdiction input before tax apportionment.
//! assert_eq!(canonical_jurisdiction(" maharashtra "), Some("Maharashtra"));
//! assert_eq!(canonical_jurisdiction("27"), Some("Maharashtra"));
//! ```

mod gstin;
mod states;

pub use gstin::{Gstin, GstinError, validate_gstin};
pub use states::{canonical_jurisdiction, is_known_state_code, state_code, state_name};
