//! Static configuration for consolidating bank transactions into a master
//! file: Open Banking API parameters per bank, and CSV column mappings per
//! bank export format.
//!
//! Both registries are read-only. The built-in ones are parsed from RON
//! compiled into the crate on first use; others can be loaded from RON files
//! of the same shape.

pub mod bank_api;
pub mod cmd;
pub mod columns;
pub mod error;
pub mod file_format;
pub mod filespec;
pub mod ordered;
mod source;
mod validate;

pub use bank_api::{BankApiConfig, BankApiRegistry, DEFAULT_BANK_ID};
pub use columns::MASTER_COLUMNS;
pub use error::{LookupError, ValidationError};
pub use file_format::{file_prefix, FileFormatConfig, FileFormatRegistry};
