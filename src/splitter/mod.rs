mod error;
mod partition;


pub use error::SplitError;
pub use partition::{SplitStats, Splitter};

/// Partition key width used by the Pwned Passwords range API
pub const DEFAULT_PREFIX_WIDTH: usize = 5;

/// Shortest line that can still be a real corpus record
///
/// A real record is a 35-character hash remainder plus a separator and
/// count after the 5-character prefix; anything shorter is extraction
/// noise and is skipped.
pub const DEFAULT_MIN_LINE_LEN: usize = 33;
