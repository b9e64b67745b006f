//! Ahnen CLI - Ahnentafel reports from a local family-tree file

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = ahnen_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
