// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Fixed filesystem layout consumed by the batch driver.
// Author: Lukas Bower

//! Fixed paths of the fuzzcc batch tree.
//!
//! Every path is relative to the directory the driver is started from and is
//! resolved once, before any stage runs.

use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// External analysis executable.
pub const FUZZCC_PATH: &str = "fuzzcc";
/// Bitcode inputs built on Linux hosts.
pub const LINUX_BITC_DIR: &str = "LinuxIRs";
/// Bitcode inputs built on Mac hosts.
pub const MAC_BITC_DIR: &str = "MacIRs";
/// Destination for collected reports.
pub const TARGET_CSV_DIR: &str = "CSVS";

/// Extension of bitcode inputs.
pub const BITC_EXT: &str = ".bitc";
/// Extension of fuzzcc reports.
pub const CSV_EXT: &str = ".csv";

/// Resolved absolute paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Path of the `fuzzcc` executable.
    pub fuzzcc: PathBuf,
    /// Linux bitcode directory.
    pub linux_bitc: PathBuf,
    /// Mac bitcode directory.
    pub mac_bitc: PathBuf,
    /// Report destination directory.
    pub target_csv: PathBuf,
}

impl Layout {
    /// Resolve the layout against an explicit root directory.
    pub fn from_root(root: &Path) -> Self {
        Layout {
            // Run as named; a symlinked tool keeps its own argv[0].
            fuzzcc: root.join(FUZZCC_PATH),
            linux_bitc: resolve(root, LINUX_BITC_DIR),
            mac_bitc: resolve(root, MAC_BITC_DIR),
            target_csv: resolve(root, TARGET_CSV_DIR),
        }
    }

    /// Resolve the layout against the process working directory.
    pub fn from_current_dir() -> Result<Self, BatchError> {
        let cwd = std::env::current_dir().map_err(BatchError::WorkingDir)?;
        Ok(Self::from_root(&cwd))
    }

    /// Directories swept by the cleanup stage, in sweep order.
    pub fn cleanup_dirs(&self) -> [&Path; 3] {
        [
            self.linux_bitc.as_path(),
            self.mac_bitc.as_path(),
            self.target_csv.as_path(),
        ]
    }
}

// Missing paths keep their joined form so the stage that touches them fails.
fn resolve(root: &Path, rel: &str) -> PathBuf {
    let joined = root.join(rel);
    joined.canonicalize().unwrap_or(joined)
}
