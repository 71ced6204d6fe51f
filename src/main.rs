// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;

mod cli;
use cli::{display, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::setup_logger(cli.verbose);

    match cli::run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", display::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
