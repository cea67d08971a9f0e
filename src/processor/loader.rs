//! Cast file loading
//!
//! Reads one export from disk and runs it through the parser. Bytes that are
//! not valid UTF-8 are replaced rather than rejected.

use crate::error::{CtdError, Result};
use crate::parser::{ParseResult, parse_text};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Read and parse a single cast export
pub async fn load_cast_file(path: &Path) -> Result<ParseResult> {
    let bytes = fs::read(path).await.map_err(|source| CtdError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let result = parse_text(&text);

    debug!(
        "Loaded {}: {} casts, {} rows",
        path.display(),
        result.cast_count(),
        result.row_count()
    );

    Ok(result)
}
