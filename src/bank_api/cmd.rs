use anyhow::Result;
use clap::Args;

use crate::bank_api::{BankApiRegistry, DEFAULT_BANK_ID};
use crate::source;

#[derive(Debug, Args)]
pub struct ShowCmd {
    /// The bank identifier to show. Defaults to the default bank.
    id: Option<String>,
    /// Print the API key and client secret instead of masking them.
    #[arg(long = "show-secrets")]
    show_secrets: bool,
}

impl ShowCmd {
    pub fn run(&self, banks: &BankApiRegistry) -> Result<String> {
        let id = self.id.as_deref().unwrap_or(DEFAULT_BANK_ID);
        let config = banks.lookup(id)?;
        if self.show_secrets {
            source::to_string(config)
        } else {
            source::to_string(&config.redacted())
        }
    }
}
