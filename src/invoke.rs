// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Sequential fuzzcc invocation over a bitcode batch.
// Author: Lukas Bower

//! One `fuzzcc` process per bitcode file, each waited on before the next.
//!
//! Only a failure to start the process counts as an error. A process that
//! starts and exits non-zero is recorded and otherwise ignored.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::{debug, info};

use crate::error::BatchError;
use crate::progress::Progress;

/// Starts the analysis tool on a single input file.
pub trait ToolLauncher {
    /// Run the tool on `input` to completion. `Err` means it never started.
    fn launch(&self, input: &Path) -> io::Result<ExitStatus>;
}

/// Launches the `fuzzcc` executable with captured output.
#[derive(Debug, Clone)]
pub struct FuzzccLauncher {
    tool: PathBuf,
}

impl FuzzccLauncher {
    /// Launcher for the executable at `tool`.
    pub fn new<P: Into<PathBuf>>(tool: P) -> Self {
        FuzzccLauncher { tool: tool.into() }
    }

    /// Path of the executable being launched.
    pub fn tool(&self) -> &Path {
        &self.tool
    }
}

impl ToolLauncher for FuzzccLauncher {
    fn launch(&self, input: &Path) -> io::Result<ExitStatus> {
        let output = Command::new(&self.tool).arg(input).output()?;
        debug!(
            "fuzzcc {}: {} bytes stdout, {} bytes stderr",
            input.display(),
            output.stdout.len(),
            output.stderr.len()
        );
        Ok(output.status)
    }
}

/// Outcome of one batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Launch attempts made, one per input.
    pub attempted: usize,
    /// Processes that started and ran to completion.
    pub launched: usize,
    /// Started processes that exited unsuccessfully.
    pub nonzero_exits: usize,
    /// Inputs whose process could not be started.
    pub launch_failures: Vec<PathBuf>,
}

/// Launch the tool once per input, in order, never stopping early.
///
/// Launch failures are reported on `out` and collected in the report; the
/// only error returned is a failure to write to `out`.
pub fn run_batch<L, W>(
    launcher: &L,
    inputs: &[PathBuf],
    out: &mut W,
) -> Result<BatchReport, BatchError>
where
    L: ToolLauncher + ?Sized,
    W: Write,
{
    let mut report = BatchReport::default();
    let mut bar = Progress::start(out, "Running Fuzzcc", inputs.len())?;
    for input in inputs {
        report.attempted += 1;
        match launcher.launch(input) {
            Ok(status) => {
                report.launched += 1;
                if !status.success() {
                    report.nonzero_exits += 1;
                }
                debug!("fuzzcc {} exited with {status}", input.display());
            }
            Err(err) => {
                info!("fuzzcc failed to start for {}: {err}", input.display());
                bar.interrupt(&format!(
                    "Error executing the fuzzcc for {}: {err}",
                    input.display()
                ))?;
                report.launch_failures.push(input.clone());
            }
        }
        bar.tick()?;
    }
    bar.finish()?;
    info!(
        "batch done: {} attempted, {} launched, {} failed to start",
        report.attempted,
        report.launched,
        report.launch_failures.len()
    );
    Ok(report)
}
