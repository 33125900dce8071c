use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::info;

use super::{distinct_count, distinct_overlap, total_count, total_overlap};
use crate::entries::{build_entries_map, FrequencyTable};
use crate::error::OverlapError;
use crate::source::Source;

/// The six figures printed for a pair of input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub first: PathBuf,
    pub second: PathBuf,
    pub first_total: usize,
    pub second_total: usize,
    pub first_distinct: usize,
    pub second_distinct: usize,
    pub total_overlap: usize,
    pub distinct_overlap: usize,
}

impl Report {
    pub fn new(
        first: impl Into<PathBuf>,
        first_table: &FrequencyTable,
        second: impl Into<PathBuf>,
        second_table: &FrequencyTable,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            first_total: total_count(first_table),
            second_total: total_count(second_table),
            first_distinct: distinct_count(first_table),
            second_distinct: distinct_count(second_table),
            total_overlap: total_overlap(first_table, second_table),
            distinct_overlap: distinct_overlap(first_table, second_table),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (self.first.display(), self.second.display());
        writeln!(f, "Total count for {}:\t{}", a, self.first_total)?;
        writeln!(f, "Total count for {}:\t{}", b, self.second_total)?;
        writeln!(f)?;
        writeln!(f, "Distinct count for {}:\t{}", a, self.first_distinct)?;
        writeln!(f, "Distinct count for {}:\t{}", b, self.second_distinct)?;
        writeln!(f)?;
        writeln!(f, "Total overlap for {} and {}:\t\t{}", a, b, self.total_overlap)?;
        writeln!(f, "Distinct overlap for {} and {}:\t{}", a, b, self.distinct_overlap)
    }
}

/// Build both tables, `first` before `second`, and summarise them.
///
/// Stops at the first error; nothing is reported for a partial run.
pub fn run<S>(
    source: &S,
    first: &Path,
    second: &Path,
    column: &str,
) -> Result<Report, OverlapError>
where
    S: Source + ?Sized,
{
    let first_table = build_entries_map(source, first, column)?;
    let second_table = build_entries_map(source, second, column)?;

    let report = Report::new(first, &first_table, second, &second_table);
    info!(
        total_overlap = report.total_overlap,
        distinct_overlap = report.distinct_overlap,
        "compared files"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::HEADER_NAME;
    use crate::source::MemSource;
    use anyhow::Result;

    fn sources() -> MemSource {
        let mut fs = MemSource::new();
        fs.insert("file1.csv", "id,udprn\n1,a\n2,b\n3,c\n4,c\n5,\"\"\n");
        fs.insert("file2.csv", "udprn,id\na,1\nc,2\nd,3\nd,4\n");
        fs
    }

    #[test]
    fn test_run_computes_all_figures() -> Result<()> {
        let fs = sources();
        let report = run(&fs, Path::new("file1.csv"), Path::new("file2.csv"), HEADER_NAME)?;
        assert_eq!(report.first_total, 4);
        assert_eq!(report.second_total, 4);
        assert_eq!(report.first_distinct, 3);
        assert_eq!(report.second_distinct, 3);
        // shared keys a and c: (1 + 1) + (2 + 1)
        assert_eq!(report.total_overlap, 5);
        assert_eq!(report.distinct_overlap, 2);
        Ok(())
    }

    #[test]
    fn test_report_text_layout() -> Result<()> {
        let fs = sources();
        let report = run(&fs, Path::new("file1.csv"), Path::new("file2.csv"), HEADER_NAME)?;
        let expected = "Total count for file1.csv:\t4\n\
                        Total count for file2.csv:\t4\n\
                        \n\
                        Distinct count for file1.csv:\t3\n\
                        Distinct count for file2.csv:\t3\n\
                        \n\
                        Total overlap for file1.csv and file2.csv:\t\t5\n\
                        Distinct overlap for file1.csv and file2.csv:\t2\n";
        assert_eq!(report.to_string(), expected);
        Ok(())
    }

    #[test]
    fn test_run_stops_at_first_failing_file() {
        let mut fs = sources();
        fs.insert("bad.csv", "id\n1\n");
        let err = run(&fs, Path::new("bad.csv"), Path::new("missing.csv"), HEADER_NAME)
            .unwrap_err();
        assert!(matches!(err, OverlapError::HeaderNotFound { ref path, .. } if path == Path::new("bad.csv")));
    }

    #[test]
    fn test_run_reports_second_file_error() {
        let fs = sources();
        let err = run(&fs, Path::new("file1.csv"), Path::new("missing.csv"), HEADER_NAME)
            .unwrap_err();
        assert!(matches!(err, OverlapError::Open { .. }));
        assert!(err.to_string().starts_with("failed to open input file 'missing.csv'"));
    }
}
