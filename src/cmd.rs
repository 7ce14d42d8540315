//! Options and subcommands that work across both registries.

use std::borrow::Cow;
use std::fmt::Write;

use anyhow::{bail, Result};
use clap::Args;

use crate::bank_api::{self, BankApiRegistry, DEFAULT_BANK_ID};
use crate::file_format::{self, FileFormatRegistry};
use crate::filespec::FileSpec;

#[derive(Debug, Args)]
pub struct RegistryOpts {
    /// RON file to read bank API configurations from, instead of the built-in
    /// ones. "-" reads from stdin.
    #[arg(long = "banks", global = true)]
    banks: Option<FileSpec>,
    /// RON file to read file format configurations from, instead of the
    /// built-in ones. "-" reads from stdin.
    #[arg(long = "formats", global = true)]
    formats: Option<FileSpec>,
}

pub struct Registries {
    pub banks: Cow<'static, BankApiRegistry>,
    pub formats: Cow<'static, FileFormatRegistry>,
}

impl Registries {
    pub fn builtin() -> Self {
        Registries {
            banks: Cow::Borrowed(bank_api::builtin()),
            formats: Cow::Borrowed(file_format::builtin()),
        }
    }
}

impl RegistryOpts {
    /// Loads the registries named on the command line, falling back to the
    /// built-in ones.
    pub fn load(&self) -> Result<Registries> {
        if let (Some(FileSpec::Stdio), Some(FileSpec::Stdio)) = (&self.banks, &self.formats) {
            bail!("only one of --banks and --formats may read stdin");
        }
        let mut regs = Registries::builtin();
        if let Some(fs) = &self.banks {
            regs.banks = Cow::Owned(BankApiRegistry::from_filespec(fs)?);
        }
        if let Some(fs) = &self.formats {
            regs.formats = Cow::Owned(FileFormatRegistry::from_filespec(fs)?);
        }
        Ok(regs)
    }
}

#[derive(Debug, Args)]
pub struct ListCmd {}

impl ListCmd {
    pub fn run(&self, regs: &Registries) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "banks:")?;
        for (id, config) in regs.banks.iter() {
            let marker = if id == DEFAULT_BANK_ID { " (default)" } else { "" };
            writeln!(out, "  {}{}\t{}\t{}", id, marker, config.currency, config.account_type)?;
        }
        writeln!(out, "file formats:")?;
        for (prefix, format) in regs.formats.iter() {
            writeln!(out, "  {}\t{}\t{}", prefix, format.currency, format.account_type)?;
        }
        Ok(out)
    }
}

#[derive(Debug, Args)]
pub struct CheckCmd {
    /// Also require the default bank to be configured.
    #[arg(long = "require-default")]
    require_default: bool,
}

impl CheckCmd {
    pub fn run(&self, regs: &Registries) -> Result<String> {
        regs.banks.validate()?;
        if self.require_default {
            regs.banks.require_default()?;
        }
        regs.formats.validate()?;
        Ok(format!(
            "ok: {} bank API configurations, {} file formats\n",
            regs.banks.len(),
            regs.formats.len()
        ))
    }
}
