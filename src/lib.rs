// Public API exports
pub mod record;
pub mod sink;
pub mod splitter;

// Re-export main types for convenience
pub use record::Record;
pub use sink::{DirSink, RangeSink};
pub use splitter::{DEFAULT_MIN_LINE_LEN, DEFAULT_PREFIX_WIDTH, SplitError, SplitStats, Splitter};
