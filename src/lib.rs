// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Library root for the fuzzdistill batch driver.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Batch driver that runs `fuzzcc` over every precompiled bitcode file of
//! the host platform and gathers the CSV reports it leaves behind.

pub mod cleanup;
pub mod collect;
pub mod error;
pub mod invoke;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod platform;
pub mod progress;
pub mod scan;

pub use error::BatchError;
pub use invoke::{BatchReport, FuzzccLauncher, ToolLauncher};
pub use layout::Layout;
pub use pipeline::{run, RunOutcome, RunSummary};
pub use platform::Platform;
