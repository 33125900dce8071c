pub mod header;
pub mod table;

use std::{
    io::{self, BufRead},
    path::Path,
    time::Instant,
};
use tracing::{debug, instrument, trace};

use crate::error::OverlapError;
use crate::source::Source;

pub use header::column_index;
pub use table::FrequencyTable;

/// Column whose values are counted.
pub const HEADER_NAME: &str = "udprn";

/// Literal quoted-empty field, treated as a missing value.
const NULL_PLACEHOLDER: &[u8] = b"\"\"";

/// Read `path` through `source` and count the values of `column`.
///
/// The first line must name `column` exactly once. Data rows too short to
/// reach the column are skipped, as are `""` placeholders. Fields are split
/// on bare commas with no quoting rules and no trimming. Lines are handled
/// as raw bytes, so text in any encoding is counted as-is.
#[instrument(level = "info", skip(source, path), fields(path = %path.as_ref().display()))]
pub fn build_entries_map<S, P>(
    source: &S,
    path: P,
    column: &str,
) -> Result<FrequencyTable, OverlapError>
where
    S: Source + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let start = Instant::now();

    let reader = source.open(path).map_err(|e| OverlapError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut lines = reader.split(b'\n');

    let header = match lines.next() {
        Some(line) => line.map_err(|e| read_error(path, e))?,
        None => {
            return Err(OverlapError::HeaderNotFound {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
        }
    };
    let index = column_index(strip_cr(&header), column, path)?;
    debug!(column, index, "located header");

    let mut table = FrequencyTable::new();
    let (mut rows, mut counted, mut nulls, mut short) = (0usize, 0usize, 0usize, 0usize);

    for (line_no, line) in lines.enumerate() {
        let line = line.map_err(|e| read_error(path, e))?;
        rows += 1;
        match strip_cr(&line).split(|&b| b == b',').nth(index) {
            None => {
                trace!(line = line_no + 2, "short row skipped");
                short += 1;
            }
            Some(value) if value == NULL_PLACEHOLDER => nulls += 1,
            Some(value) => {
                table.record(value);
                counted += 1;
            }
        }
    }

    debug!(
        rows,
        counted,
        nulls,
        short,
        distinct = table.len(),
        elapsed = ?start.elapsed(),
        "built entries map"
    );
    Ok(table)
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn read_error(path: &Path, source: io::Error) -> OverlapError {
    OverlapError::Read {
        path: path.to_path_buf(),
        source,
    }
}
