// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ophours::CoreError;
use ophours_persistence::PersistenceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or querying a schedule failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The configuration database failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// A seed file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadSeed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output could not be rendered as JSON.
    #[error("Failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
