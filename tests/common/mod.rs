// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Shared fixtures for the batch driver integration tests.
// Author: Lukas Bower
#![allow(dead_code)]

use fuzzdistill_batch::{Layout, ToolLauncher};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Create `fuzzcc`'s directory tree under `root` and resolve it.
pub fn batch_tree(root: &Path) -> Layout {
    for dir in ["LinuxIRs", "MacIRs", "CSVS"] {
        fs::create_dir_all(root.join(dir)).expect("create batch dir");
    }
    Layout::from_root(root)
}

pub fn touch(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write fixture");
}

pub fn names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Stand-in for fuzzcc: records every call and writes `report_<stem>.csv`
/// next to its input, unless told to refuse to start for a given input.
#[derive(Default)]
pub struct FakeFuzzcc {
    pub calls: RefCell<Vec<PathBuf>>,
    pub refuse: Vec<String>,
    pub exit_code: i32,
    pub write_reports: bool,
}

impl FakeFuzzcc {
    pub fn reporting() -> Self {
        FakeFuzzcc {
            write_reports: true,
            ..FakeFuzzcc::default()
        }
    }

    pub fn called_names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl ToolLauncher for FakeFuzzcc {
    fn launch(&self, input: &Path) -> io::Result<ExitStatus> {
        self.calls.borrow_mut().push(input.to_path_buf());
        let name = input.file_name().unwrap().to_string_lossy();
        if self.refuse.iter().any(|r| name == r.as_str()) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "fuzzcc missing"));
        }
        if self.write_reports {
            let stem = input.file_stem().unwrap().to_string_lossy();
            let report = input.with_file_name(format!("report_{stem}.csv"));
            fs::write(report, format!("fn,bb\n{stem},1\n"))?;
        }
        Ok(exit_status(self.exit_code))
    }
}
