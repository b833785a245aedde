// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Move fuzzcc reports into the collection directory.
// Author: Lukas Bower

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::BatchError;
use crate::layout::CSV_EXT;
use crate::progress::Progress;
use crate::scan::scan_dir;

/// Move every `.csv` entry of `source` into `target`, keeping file names.
///
/// `target` must already exist. A report whose name is already present in
/// `target` replaces it. Returns the destination paths.
pub fn collect_csvs<W: Write>(
    source: &Path,
    target: &Path,
    out: &mut W,
) -> Result<Vec<PathBuf>, BatchError> {
    let reports = scan_dir(source, CSV_EXT)?;
    let mut bar = Progress::start(out, "Moving csvs", reports.len())?;
    let mut moved = Vec::with_capacity(reports.len());
    for report in &reports {
        moved.push(move_into(report, target)?);
        bar.tick()?;
    }
    bar.finish()?;
    info!(
        "collected {} reports from {} into {}",
        moved.len(),
        source.display(),
        target.display()
    );
    Ok(moved)
}

/// Move `file` into `dir`, falling back to copy and delete when a plain
/// rename is refused (e.g. across filesystems).
pub fn move_into(file: &Path, dir: &Path) -> Result<PathBuf, BatchError> {
    let dest = match file.file_name() {
        Some(name) => dir.join(name),
        None => dir.to_path_buf(),
    };
    if let Err(rename_err) = fs::rename(file, &dest) {
        debug!(
            "rename {} failed ({rename_err}), copying instead",
            file.display()
        );
        copy_then_remove(file, &dest).map_err(|source| BatchError::Move {
            from: file.to_path_buf(),
            to: dest.clone(),
            rename: rename_err,
            source,
        })?;
    }
    debug!("moved {} -> {}", file.display(), dest.display());
    Ok(dest)
}

// A report must end up in exactly one place: undo the copy if the source
// cannot be removed.
fn copy_then_remove(file: &Path, dest: &Path) -> io::Result<()> {
    fs::copy(file, dest)?;
    if let Err(err) = fs::remove_file(file) {
        let _ = fs::remove_file(dest);
        return Err(err);
    }
    Ok(())
}
