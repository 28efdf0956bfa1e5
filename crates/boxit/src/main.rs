use anyhow::Result;
use boxit_core::errors::BoxitError;
use clap::Parser;

mod cli;
mod commands;

fn main() -> Result<()> {
    // Parse CLI arguments
    let parsed = cli::Cli::parse();

    match parsed.dispatch() {
        Ok(()) => Ok(()),
        Err(err) => {
            // Unknown style names are user errors: print the diagnostic alone
            if let Some(boxit_error) = err.downcast_ref::<BoxitError>() {
                if matches!(boxit_error, BoxitError::Style(_)) {
                    eprintln!("Error: {}", boxit_error);
                    std::process::exit(1);
                }
            }

            Err(err)
        }
    }
}
