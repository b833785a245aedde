// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Error type shared by the batch pipeline stages.
// Author: Lukas Bower

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failures that abort a batch run.
///
/// Launch failures of `fuzzcc` are not represented here; those are tolerated
/// by [`crate::invoke::run_batch`] and only show up in its report.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Listing a directory failed.
    #[error("list directory {}: {source}", .dir.display())]
    Scan {
        /// Directory being listed.
        dir: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Deleting a stale report failed.
    #[error("remove {}: {source}", .path.display())]
    Remove {
        /// File being deleted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Moving a report into the target directory failed.
    #[error(
        "move {} -> {}: {source} (rename: {rename})",
        .from.display(),
        .to.display()
    )]
    Move {
        /// Source file.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Why the plain rename was refused.
        rename: io::Error,
        /// Error from the copy and delete fallback.
        #[source]
        source: io::Error,
    },
    /// The working directory could not be determined.
    #[error("resolve working directory: {0}")]
    WorkingDir(#[source] io::Error),
    /// Writing progress or counts to the output stream failed.
    #[error("write output: {0}")]
    Output(#[from] io::Error),
}
