// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Logger setup for the batch driver binary.
// Author: Lukas Bower

use env_logger::{Builder, Env};

/// Filter applied when `RUST_LOG` is unset.
///
/// stderr carries only the unsupported-host diagnostic, so stage logging
/// stays quiet unless asked for.
pub const DEFAULT_FILTER: &str = "error";

/// Logger builder honouring `RUST_LOG`, defaulting to [`DEFAULT_FILTER`].
pub fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
}
