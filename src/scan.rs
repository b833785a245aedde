// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Non-recursive directory listing filtered by extension.
// Author: Lukas Bower

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::BatchError;

/// List the immediate entries of `dir` whose file name ends with `ext`.
///
/// Paths are joined onto `dir`, so an absolute `dir` yields absolute paths.
/// Entries come back in directory iteration order.
pub fn scan_dir(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, BatchError> {
    let scan_err = |source| BatchError::Scan {
        dir: dir.to_path_buf(),
        source,
    };
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(ext) {
            found.push(dir.join(name));
        }
    }
    debug!("scan {}: {} {} entries", dir.display(), found.len(), ext);
    Ok(found)
}
