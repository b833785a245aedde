// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: CLI entry point for the fuzzcc batch driver.
// Author: Lukas Bower
#![forbid(unsafe_code)]

//! Runs fuzzcc over `./LinuxIRs` or `./MacIRs` and collects reports into
//! `./CSVS`.

use anyhow::{Context, Result};
use clap::Parser;
use fuzzdistill_batch::{run, FuzzccLauncher, Layout, Platform};
use std::io;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Run fuzzcc over every bitcode file and collect its CSV reports",
    long_about = "Run fuzzcc over every bitcode file and collect its CSV reports.\n\n\
                  Expects ./fuzzcc, ./LinuxIRs, ./MacIRs and ./CSVS in the working \
                  directory. Stale .csv files in all three directories are deleted \
                  before every run."
)]
struct Cli {}

fn main() -> Result<()> {
    let _ = Cli::parse();
    fuzzdistill_batch::logging::builder().init();

    let layout = Layout::from_current_dir()?;
    let launcher = FuzzccLauncher::new(layout.fuzzcc.clone());
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(
        &layout,
        Platform::detect(),
        &launcher,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("fuzzcc batch run")?;
    Ok(())
}
