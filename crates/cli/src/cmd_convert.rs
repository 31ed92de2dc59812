// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Convert command implementation.

use std::io::Write;

use anyhow::Context;

use junit_to_ctrf::cli::{Cli, OutputTarget};
use junit_to_ctrf::config;
use junit_to_ctrf::convert::{self, convert};
use junit_to_ctrf::error::ExitCode;

/// Run the conversion.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;

    let options = cli.convert_options(&config);
    let target = cli.output_target(&config);

    let conversion = convert(&cli.pattern, &options)?;
    for warning in &conversion.warnings {
        eprintln!("junit-to-ctrf: warning: {}", warning);
    }

    // Nothing to convert is not a failure
    let Some(report) = conversion.report else {
        return Ok(ExitCode::Success);
    };

    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            convert::write_report_to(&mut handle, &report)?;
            handle.flush()?;
        }
        OutputTarget::File(path) => {
            let path = std::path::absolute(&path)
                .with_context(|| format!("failed to resolve {}", path.display()))?;
            println!("Writing CTRF report to: {}", path.display());
            convert::write_report(&path, &report)?;
            println!("Conversion completed successfully.");
        }
    }

    Ok(ExitCode::Success)
}
