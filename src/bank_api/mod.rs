//! Open Banking API connection parameters, keyed by bank identifier.

use std::path::Path;

use anyhow::Result;
use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::columns::is_master_column;
use crate::error::{LookupError, ValidationError};
use crate::filespec::FileSpec;
use crate::ordered::OrderedMap;
use crate::source;
use crate::validate::check_currency;

pub mod cmd;

/// The bank whose configuration is used when none is selected explicitly.
pub const DEFAULT_BANK_ID: &str = "discount_bank";

/// Token in `transactions_endpoint` that the caller replaces with the
/// account identifier. It is never substituted here.
pub const ACCOUNT_ID_PLACEHOLDER: &str = "{ACCOUNT_ID}";

const REDACTED: &str = "<redacted>";

const BUILTIN_SOURCE: &str = include_str!("../../data/bank_apis.ron");

lazy_static! {
    static ref BUILTIN: BankApiRegistry = BankApiRegistry::parse(BUILTIN_SOURCE)
        .and_then(|reg| {
            reg.require_default()?;
            Ok(reg)
        })
        .expect("built-in bank API registry must be valid");
}

/// The bank API registry compiled into the crate.
pub fn builtin() -> &'static BankApiRegistry {
    &BUILTIN
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "BankApi", deny_unknown_fields)]
pub struct BankApiConfig {
    /// API root URL.
    pub base_url: String,
    /// Path relative to `base_url` for token acquisition.
    pub auth_endpoint: String,
    /// Path relative to `base_url` for listing transactions. Contains
    /// [`ACCOUNT_ID_PLACEHOLDER`].
    pub transactions_endpoint: String,
    pub api_key: String,
    pub client_secret: String,
    pub account_id: String,
    pub account_type: String,
    pub currency: String,
    /// Maps a field name in the bank's API response to a master file column.
    pub mapping: OrderedMap<String>,
}

impl BankApiConfig {
    /// Returns a copy with the credentials masked, for display.
    pub fn redacted(&self) -> Self {
        BankApiConfig {
            api_key: REDACTED.to_string(),
            client_secret: REDACTED.to_string(),
            ..self.clone()
        }
    }

    fn validate(&self, id: &str) -> Result<(), ValidationError> {
        if !self.transactions_endpoint.contains(ACCOUNT_ID_PLACEHOLDER) {
            return Err(ValidationError::MissingAccountPlaceholder {
                bank: id.to_string(),
                endpoint: self.transactions_endpoint.clone(),
                placeholder: ACCOUNT_ID_PLACEHOLDER,
            });
        }
        check_currency(&format!("bank {:?}", id), &self.currency)?;
        for (field, column) in self.mapping.iter() {
            if !is_master_column(column) {
                return Err(ValidationError::NotAMasterColumn {
                    bank: id.to_string(),
                    field: field.to_string(),
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename = "BankApis")]
pub struct BankApiRegistry(OrderedMap<BankApiConfig>);

impl BankApiRegistry {
    pub fn parse(s: &str) -> Result<Self> {
        let reg = Self::parse_unvalidated(s)?;
        reg.validate()?;
        Ok(reg)
    }

    pub fn parse_unvalidated(s: &str) -> Result<Self> {
        source::from_str(s)
    }

    pub fn from_filespec(file_spec: &FileSpec) -> Result<Self> {
        let reg: Self = source::from_filespec(file_spec)?;
        reg.validate()?;
        debug!(banks = reg.len(), source = %file_spec, "loaded bank API registry");
        Ok(reg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_filespec(&FileSpec::Path(path.to_owned()))
    }

    pub fn get(&self, id: &str) -> Option<&BankApiConfig> {
        self.0.get(id)
    }

    pub fn lookup(&self, id: &str) -> Result<&BankApiConfig, LookupError> {
        self.get(id).ok_or_else(|| LookupError::UnknownBank { id: id.to_string() })
    }

    /// Looks up [`DEFAULT_BANK_ID`].
    pub fn default_config(&self) -> Result<&BankApiConfig, LookupError> {
        self.lookup(DEFAULT_BANK_ID)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BankApiConfig)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (id, config) in self.iter() {
            config.validate(id)?;
        }
        debug!(banks = self.len(), "validated bank API registry");
        Ok(())
    }

    /// Checks that [`DEFAULT_BANK_ID`] is present.
    pub fn require_default(&self) -> Result<(), ValidationError> {
        if self.get(DEFAULT_BANK_ID).is_some() {
            Ok(())
        } else {
            Err(ValidationError::MissingDefaultBank {
                id: DEFAULT_BANK_ID,
            })
        }
    }
}
