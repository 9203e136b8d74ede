//! Produksi Form - production form data entry for a small cigarette factory
//!
//! A CLI tool that resolves a production machine, fills in its paper-form
//! replica, and computes the SISA/HASIL figures.

use clap::Parser;
use produksi_form::cli::Cli;
use produksi_form::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
