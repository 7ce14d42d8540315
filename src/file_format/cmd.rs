use std::fmt::Write;

use anyhow::{bail, Result};
use clap::Args;
use tracing::warn;

use crate::file_format::FileFormatRegistry;
use crate::source;

#[derive(Debug, Args)]
pub struct ShowCmd {
    /// The file prefix of the format to show.
    prefix: String,
}

impl ShowCmd {
    pub fn run(&self, formats: &FileFormatRegistry) -> Result<String> {
        source::to_string(formats.lookup(&self.prefix)?)
    }
}

#[derive(Debug, Args)]
pub struct MatchCmd {
    /// Fail if any file name has no matching format.
    #[arg(long = "strict")]
    strict: bool,
    /// The file names to find formats for.
    #[arg(required = true)]
    file_names: Vec<String>,
}

impl MatchCmd {
    /// Writes one tab separated line per file name: the name, the derived
    /// prefix, then the format's currency and account type. Names without a
    /// format get "-" in place of the last two.
    pub fn run(&self, formats: &FileFormatRegistry) -> Result<String> {
        let mut out = String::new();
        let mut unmatched = 0;
        for file_name in &self.file_names {
            match formats.for_file_name(file_name) {
                Ok((prefix, format)) => writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    file_name, prefix, format.currency, format.account_type
                )?,
                Err(err) => {
                    warn!(%file_name, "{}", err);
                    unmatched += 1;
                    let prefix = crate::file_format::file_prefix(file_name);
                    writeln!(out, "{}\t{}\t-\t-", file_name, prefix)?;
                }
            }
        }
        if self.strict && unmatched > 0 {
            bail!(
                "{} of {} file names have no file format configuration",
                unmatched,
                self.file_names.len()
            );
        }
        Ok(out)
    }
}
