//! Core invoicing types, tax apportionment, numbering and assembly.
//!
//! Everything here is deterministic domain logic. The only shared mutable
//! state is the counter store behind [`CounterStore`].

mod assembly;
mod builder;
mod error;
mod listing;
mod numbering;
mod tax;
mod types;
mod validation;

pub use assembly::*;
pub use builder::*;
pub use error::*;
pub use listing::*;
pub use numbering::*;
pub use tax::*;
pub use types::*;
pub use validation::*;
