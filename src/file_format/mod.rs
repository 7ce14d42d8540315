//! CSV column mappings for bank and credit card export files, keyed by file
//! name prefix.

use std::path::Path;

use anyhow::Result;
use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LookupError, ValidationError};
use crate::filespec::FileSpec;
use crate::ordered::OrderedMap;
use crate::source;
use crate::validate::check_currency;

pub mod cmd;

const BUILTIN_SOURCE: &str = include_str!("../../data/file_formats.ron");

lazy_static! {
    static ref BUILTIN: FileFormatRegistry = FileFormatRegistry::parse(BUILTIN_SOURCE)
        .expect("built-in file format registry must be valid");
}

/// The file format registry compiled into the crate.
pub fn builtin() -> &'static FileFormatRegistry {
    &BUILTIN
}

/// Returns the registry key for a file: the part of its file name before the
/// first underscore, or the whole file name if it has none.
///
/// Any leading directories are ignored. The name is otherwise used as-is.
pub fn file_prefix(file_name: &str) -> &str {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);
    name.split_once('_').map_or(name, |(prefix, _)| prefix)
}

fn default_header_row() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "FileFormat", deny_unknown_fields)]
pub struct FileFormatConfig {
    /// Maps a CSV column header, exactly as found in the file, to an internal
    /// field name.
    ///
    /// Note that this runs in the opposite direction to
    /// [`crate::bank_api::BankApiConfig::mapping`], which maps source names
    /// straight to master file columns.
    pub format_map: OrderedMap<String>,
    pub currency: String,
    pub account_type: String,
    /// 1-based row number of the CSV header.
    #[serde(default = "default_header_row")]
    pub header_row: u32,
    /// Account number to use for files that do not contain one.
    #[serde(default)]
    pub account_number: Option<String>,
}

impl FileFormatConfig {
    fn validate(&self, prefix: &str) -> Result<(), ValidationError> {
        if self.format_map.is_empty() {
            return Err(ValidationError::EmptyFormatMap {
                prefix: prefix.to_string(),
            });
        }
        if self.header_row == 0 {
            return Err(ValidationError::ZeroHeaderRow {
                prefix: prefix.to_string(),
            });
        }
        check_currency(&format!("file format {:?}", prefix), &self.currency)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename = "FileFormats")]
pub struct FileFormatRegistry(OrderedMap<FileFormatConfig>);

impl FileFormatRegistry {
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
        debug!(formats = reg.len(), source = %file_spec, "loaded file format registry");
        Ok(reg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_filespec(&FileSpec::Path(path.to_owned()))
    }

    pub fn get(&self, prefix: &str) -> Option<&FileFormatConfig> {
        self.0.get(prefix)
    }

    pub fn lookup(&self, prefix: &str) -> Result<&FileFormatConfig, LookupError> {
        self.get(prefix)
            .ok_or_else(|| LookupError::UnknownFilePrefix {
                prefix: prefix.to_string(),
            })
    }

    /// Finds the format for a file by its name, returning the derived prefix
    /// along with the format.
    pub fn for_file_name<'a>(
        &self,
        file_name: &'a str,
    ) -> Result<(&'a str, &FileFormatConfig), LookupError> {
        let prefix = file_prefix(file_name);
        self.lookup(prefix).map(|format| (prefix, format))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileFormatConfig)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (prefix, format) in self.iter() {
            format.validate(prefix)?;
        }
        debug!(formats = self.len(), "validated file format registry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_case::test_case;

    use super::*;

    fn format_map(format: &FileFormatConfig) -> Vec<(&str, &str)> {
        format
            .format_map
            .iter()
            .map(|(k, v)| (k, v.as_str()))
            .collect()
    }

    #[test]
    fn lloyds_current_account() {
        let format = builtin().lookup("19988560").expect("19988560");
        assert_eq!("GBP", format.currency);
        assert_eq!("Current Account", format.account_type);
        assert_eq!(1, format.header_row);
        assert_eq!(None, format.account_number);
        assert_eq!(
            vec![
                ("Transaction Date", "transaction_date"),
                ("Transaction Description", "transaction_description"),
                ("Account Number", "account_number"),
                ("Debit Amount", "debit_amount"),
                ("Credit Amount", "credit_amount"),
            ],
            format_map(format)
        );
    }

    #[test]
    fn hebrew_current_account_kept_verbatim() {
        let format = builtin().lookup("עובר ושב").expect("hebrew current account");
        assert_eq!("ILS", format.currency);
        assert_eq!(8, format.header_row);
        assert_eq!(Some("1920022824"), format.account_number.as_deref());
        assert_eq!(
            Some("original_amount"),
            format.format_map.get("₪ זכות/חובה ").map(String::as_str)
        );
        assert_eq!(None, format.format_map.get("₪ זכות/חובה"));
    }

    #[test]
    fn builtin_prefixes_in_source_order() {
        assert_eq!(
            vec![
                "1231",
                "19988560",
                "עובר ושב",
                "פירוט חיובים לכרטיס מאסטרקארד"
            ],
            builtin().prefixes().collect::<Vec<_>>()
        );
    }

    #[test_case("nonexistent_bank")]
    #[test_case("1998856"; "shorter prefix")]
    #[test_case("19988560 "; "no trimming")]
    #[test_case(""; "empty")]
    fn unknown_prefix(prefix: &str) {
        assert_eq!(None, builtin().get(prefix));
        assert_eq!(
            Err(LookupError::UnknownFilePrefix {
                prefix: prefix.to_string()
            }),
            builtin().lookup(prefix)
        );
    }

    #[test_case("19988560_20252204_0309.csv" => "19988560")]
    #[test_case("downloads/19988560_20252204_0309.csv" => "19988560"; "ignores directory")]
    #[test_case("my_dir/1231.csv" => "1231.csv"; "underscore only in directory")]
    #[test_case("1231_statement.csv" => "1231")]
    #[test_case("עובר ושב_2025.csv" => "עובר ושב"; "hebrew")]
    #[test_case("_leading.csv" => ""; "leading underscore")]
    #[test_case("statement.csv" => "statement.csv"; "no underscore")]
    fn prefix(file_name: &str) -> &str {
        file_prefix(file_name)
    }

    #[test]
    fn for_file_name() {
        let (prefix, format) = builtin()
            .for_file_name("19988560_20252204_0309.csv")
            .expect("known file");
        assert_eq!("19988560", prefix);
        assert_eq!("Current Account", format.account_type);

        assert_eq!(
            Err(LookupError::UnknownFilePrefix {
                prefix: "999".to_string()
            }),
            builtin().for_file_name("999_export.csv")
        );
    }

    #[test]
    fn header_row_defaults_to_one() {
        let reg = FileFormatRegistry::parse(r#"FileFormats({"x": FileFormat(format_map: {"Date": "transaction_date"}, currency: "EUR", account_type: "Savings")})"#)
            .expect("valid registry");
        let format = reg.lookup("x").unwrap();
        assert_eq!(1, format.header_row);
        assert_eq!(None, format.account_number);
    }

    #[test_case(
        r#"FileFormats({"x": FileFormat(format_map: {}, currency: "EUR", account_type: "")})"#
        => ValidationError::EmptyFormatMap { prefix: "x".to_string() };
        "empty format map"
    )]
    #[test_case(
        r#"FileFormats({"x": FileFormat(format_map: {"a": "b"}, currency: "EUR", account_type: "", header_row: 0)})"#
        => ValidationError::ZeroHeaderRow { prefix: "x".to_string() };
        "zero header row"
    )]
    #[test_case(
        r#"FileFormats({"x": FileFormat(format_map: {"a": "b"}, currency: "€", account_type: "")})"#
        => ValidationError::BadCurrency { entry: "file format \"x\"".to_string(), currency: "€".to_string() };
        "bad currency"
    )]
    fn invalid(s: &str) -> ValidationError {
        FileFormatRegistry::parse_unvalidated(s)
            .expect("parses")
            .validate()
            .unwrap_err()
    }

    #[test]
    fn rejects_duplicate_header() {
        let s = r#"FileFormats({"x": FileFormat(format_map: {"Date": "a", "Date": "b"}, currency: "EUR", account_type: "")})"#;
        assert!(FileFormatRegistry::parse_unvalidated(s).is_err());
    }

    #[test]
    fn format_map_values_are_not_master_columns() {
        // Values are internal field names, so they are not checked against
        // the master file columns.
        let format = builtin()
            .lookup("פירוט חיובים לכרטיס מאסטרקארד")
            .expect("mastercard");
        assert_eq!(
            Some("transaction_type"),
            format.format_map.get("סוג עסקה").map(String::as_str)
        );
    }

    #[test]
    fn from_path() {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(BUILTIN_SOURCE.as_bytes()).expect("write");
        let reg = FileFormatRegistry::from_path(f.path()).expect("load");
        assert_eq!(builtin().len(), reg.len());
        assert_eq!(builtin().get("1231"), reg.get("1231"));
    }

    #[test]
    fn builtin_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileFormatRegistry>();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| builtin().get("19988560").is_some()))
            .collect();
        for handle in handles {
            assert!(handle.join().expect("thread"));
        }
    }
}
