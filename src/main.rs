use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use accountconfig::filespec::{self, FileSpec};
use accountconfig::{bank_api, cmd, file_format};

#[derive(Debug, Parser)]
/// Inspects the bank API and file format configuration used to consolidate
/// transactions.
struct Command {
    #[command(flatten)]
    registries: cmd::RegistryOpts,
    /// The file to write to (overwrites any existing file). "-" writes to
    /// stdout.
    #[arg(short = 'o', long = "output", default_value = "-", global = true)]
    output: FileSpec,
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    /// Lists the configured banks and file formats.
    #[command(name = "list")]
    List(cmd::ListCmd),
    /// Prints the configuration for one bank.
    #[command(name = "show-bank")]
    ShowBank(bank_api::cmd::ShowCmd),
    /// Prints the configuration for one file format.
    #[command(name = "show-format")]
    ShowFormat(file_format::cmd::ShowCmd),
    /// Finds the file format for each of the given file names.
    #[command(name = "match-file")]
    MatchFile(file_format::cmd::MatchCmd),
    /// Validates the configuration.
    #[command(name = "check")]
    Check(cmd::CheckCmd),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = Command::parse();
    let regs = cmd.registries.load()?;
    use SubCommand::*;
    let out = match &cmd.subcmd {
        List(sub) => sub.run(&regs),
        ShowBank(sub) => sub.run(&regs.banks),
        ShowFormat(sub) => sub.run(&regs.formats),
        MatchFile(sub) => sub.run(&regs.formats),
        Check(sub) => sub.run(&regs),
    }?;
    filespec::write_file(&cmd.output, &out)
}
