use thiserror::Error;

/// A key was not present in a registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no bank API configuration for bank {id:?}")]
    UnknownBank { id: String },
    #[error("no file format configuration for file prefix {prefix:?}")]
    UnknownFilePrefix { prefix: String },
}

/// A registry entry breaks one of the conventions its consumers rely on.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("bank {bank:?} maps field {field:?} to {column:?}, which is not a master file column")]
    NotAMasterColumn {
        bank: String,
        field: String,
        column: String,
    },
    #[error("bank {bank:?} has transactions endpoint {endpoint:?} without a {placeholder} placeholder")]
    MissingAccountPlaceholder {
        bank: String,
        endpoint: String,
        placeholder: &'static str,
    },
    #[error("{entry} has currency {currency:?}, want a three letter upper case code")]
    BadCurrency { entry: String, currency: String },
    #[error("file format {prefix:?} has an empty format map")]
    EmptyFormatMap { prefix: String },
    #[error("file format {prefix:?} has header row 0, rows are numbered from 1")]
    ZeroHeaderRow { prefix: String },
    #[error("default bank {id:?} is not configured")]
    MissingDefaultBank { id: &'static str },
}
