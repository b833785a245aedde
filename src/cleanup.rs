// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Remove stale fuzzcc reports before a run.
// Author: Lukas Bower

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::error::BatchError;
use crate::layout::CSV_EXT;
use crate::progress::Progress;
use crate::scan::scan_dir;

/// Delete every `.csv` entry directly inside `dir`.
///
/// Returns how many files were removed; a second call on the same directory
/// returns zero.
pub fn clear_csvs<W: Write>(dir: &Path, out: &mut W) -> Result<usize, BatchError> {
    let stale = scan_dir(dir, CSV_EXT)?;
    let mut bar = Progress::start(out, "removing csvs", stale.len())?;
    for path in &stale {
        fs::remove_file(path).map_err(|source| BatchError::Remove {
            path: path.clone(),
            source,
        })?;
        debug!("removed {}", path.display());
        bar.tick()?;
    }
    bar.finish()?;
    info!("cleared {} reports from {}", stale.len(), dir.display());
    Ok(stale.len())
}
