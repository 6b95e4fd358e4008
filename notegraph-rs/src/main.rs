//! Notegraph CLI entry point.

use clap::Parser;
use notegraph::cli::args::{Cli, Commands};
use notegraph::cli::output::Output;
use notegraph::cli::{append, create, links, list, read, recent, search, tags, tree, update};
use notegraph::config::Config;
use notegraph::error::{VaultError, exit_code};
use notegraph::vault::Vault;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), VaultError> {
    let config = Config::load()?;
    let vault_path = config.resolve_vault_path(cli.vault.as_deref());
    let vault = Vault::open(vault_path)?;

    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::List(args) => list::run(&vault, args, &output),
        Commands::Read(args) => read::run(&vault, args, &output),
        Commands::Links(args) => links::run(&vault, args, &output),
        Commands::Search(args) => search::run(&vault, args, &output),
        Commands::Tagged(args) => tags::tagged(&vault, args, &output),
        Commands::Tags(args) => tags::census(&vault, args, &output),
        Commands::Recent(args) => recent::run(&vault, args, &output),
        Commands::Tree(args) => tree::run(&vault, args, &output),
        Commands::Create(args) => create::run(&vault, args, &output),
        Commands::Update(args) => update::run(&vault, args, &output),
        Commands::Append(args) => append::run(&vault, args, &output),
    }
}
