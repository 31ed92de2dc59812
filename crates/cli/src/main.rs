// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! junit-to-ctrf CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use junit_to_ctrf::cli::Cli;
use junit_to_ctrf::error::ExitCode;

mod cmd_convert;

fn init_logging() {
    let filter = EnvFilter::try_from_env("CTRF_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("junit-to-ctrf: {}", e);
            match e.downcast_ref::<junit_to_ctrf::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_convert::run(&cli)
}
