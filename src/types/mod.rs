//! Type definitions for monthwise

mod error;
mod ledger;
mod month;
mod summary;

pub use error::*;
pub use ledger::*;
pub use month::*;
pub use summary::*;
