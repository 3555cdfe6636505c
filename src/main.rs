//! Storefront - in-memory store inventory and ordering

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = storefront::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
