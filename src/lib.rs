pub mod entries;
pub mod error;
pub mod source;
pub mod stats;

pub use entries::{build_entries_map, FrequencyTable, HEADER_NAME};
pub use error::OverlapError;
pub use source::{MemSource, OsSource, Source};
pub use stats::{run, Report};
