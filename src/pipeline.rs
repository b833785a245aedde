// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Cleanup, dispatch, invoke and collect stages of one run.
// Author: Lukas Bower

//! One pass of the batch driver:
//! `CLEANUP -> {Linux | Mac | unsupported} -> SCAN -> INVOKE -> COLLECT`.
//!
//! Cleanup always runs, even when the host is unsupported. Any filesystem
//! error ends the run immediately; work already done stays done.

use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::cleanup::clear_csvs;
use crate::collect::collect_csvs;
use crate::error::BatchError;
use crate::invoke::{run_batch, BatchReport, ToolLauncher};
use crate::layout::{Layout, BITC_EXT};
use crate::platform::Platform;
use crate::scan::scan_dir;

/// Diagnostic written to the error stream for unsupported hosts.
pub const UNSUPPORTED_MSG: &str = "Host platform not supported";

/// Counts gathered over a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Platform whose bitcode directory was processed.
    pub platform: Platform,
    /// Stale reports deleted during cleanup, across all three directories.
    pub cleared: usize,
    /// Bitcode files found.
    pub bitcode_files: Vec<PathBuf>,
    /// Invocation results.
    pub batch: BatchReport,
    /// Reports now in the target directory.
    pub collected: Vec<PathBuf>,
}

/// How a run ended without a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// All stages ran.
    Completed(RunSummary),
    /// Cleanup ran, then the host was rejected.
    Unsupported {
        /// Stale reports deleted before the host was rejected.
        cleared: usize,
    },
}

/// Drive one run against `layout`.
///
/// `platform` is the already-detected host; `None` stops after cleanup with
/// [`UNSUPPORTED_MSG`] on `err`. Progress and counts go to `out`.
pub fn run<L, W, E>(
    layout: &Layout,
    platform: Option<Platform>,
    launcher: &L,
    out: &mut W,
    err: &mut E,
) -> Result<RunOutcome, BatchError>
where
    L: ToolLauncher + ?Sized,
    W: Write,
    E: Write,
{
    let mut cleared = 0;
    for dir in layout.cleanup_dirs() {
        cleared += clear_csvs(dir, out)?;
    }

    let Some(platform) = platform else {
        info!("unsupported host os {}", std::env::consts::OS);
        writeln!(err, "{UNSUPPORTED_MSG}")?;
        return Ok(RunOutcome::Unsupported { cleared });
    };

    let bitc_dir = platform.bitcode_dir(layout);
    info!("processing {platform} bitcode in {}", bitc_dir.display());
    let bitcode_files = scan_dir(bitc_dir, BITC_EXT)?;
    writeln!(out, "Found {} {platform} bitcode files", bitcode_files.len())?;
    writeln!(out, "Processing all bitcs")?;

    let batch = run_batch(launcher, &bitcode_files, out)?;

    // fuzzcc is expected to drop its reports next to its input.
    let collected = collect_csvs(bitc_dir, &layout.target_csv, out)?;
    writeln!(out, "Collected {} csv reports", collected.len())?;

    Ok(RunOutcome::Completed(RunSummary {
        platform,
        cleared,
        bitcode_files,
        batch,
        collected,
    }))
}
