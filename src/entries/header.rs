use std::path::Path;

use crate::error::OverlapError;

/// Zero-based position of `column` in a comma-split header line.
///
/// Matching is exact and case-sensitive, byte for byte. The column must
/// appear exactly once; `path` is only used to label the error.
pub fn column_index(header: &[u8], column: &str, path: &Path) -> Result<usize, OverlapError> {
    let mut found = None;
    for (i, field) in header.split(|&b| b == b',').enumerate() {
        if field != column.as_bytes() {
            continue;
        }
        if found.is_some() {
            return Err(OverlapError::AmbiguousHeader {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
        found = Some(i);
    }

    found.ok_or_else(|| OverlapError::HeaderNotFound {
        column: column.to_string(),
        path: path.to_path_buf(),
    })
}
