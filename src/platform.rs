// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Host platform selection for the bitcode input directory.
// Author: Lukas Bower

use std::fmt;
use std::path::Path;

use crate::layout::Layout;

/// Host platforms with a bitcode input directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Linux hosts read `LinuxIRs`.
    Linux,
    /// Mac hosts read `MacIRs`.
    Mac,
}

impl Platform {
    /// Map a Rust OS identifier (`std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(Platform::Linux),
            "macos" => Some(Platform::Mac),
            _ => None,
        }
    }

    /// Detect the platform of the running host.
    pub fn detect() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Bitcode directory this platform operates on.
    pub fn bitcode_dir(self, layout: &Layout) -> &Path {
        match self {
            Platform::Linux => &layout.linux_bitc,
            Platform::Mac => &layout.mac_bitc,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => f.write_str("Linux"),
            Platform::Mac => f.write_str("Mac"),
        }
    }
}
