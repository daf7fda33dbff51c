use super::{DEFAULT_MIN_LINE_LEN, DEFAULT_PREFIX_WIDTH, SplitError};
use crate::record::Record;
use crate::sink::RangeSink;
use std::io::BufRead;

/// Counters accumulated over one partition pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Lines pulled from the source
    pub lines_read: u64,
    /// Lines dropped by the minimum-length rule
    pub lines_skipped: u64,
    /// Range files flushed
    pub ranges_written: u64,
}

/// The prefix group currently being accumulated
struct Group {
    prefix: String,
    body: String,
}

/// Streaming partitioner for a prefix-sorted corpus
pub struct Splitter {
    prefix_width: usize,
    min_line_len: usize,
}

impl Splitter {
    /// Create a splitter with the Pwned Passwords defaults
    pub fn new() -> Self {
        Self {
            prefix_width: DEFAULT_PREFIX_WIDTH,
            min_line_len: DEFAULT_MIN_LINE_LEN,
        }
    }

    /// Set the partition key width
    pub fn prefix_width(mut self, width: usize) -> Self {
        self.prefix_width = width;
        self
    }

    /// Set the minimum valid line length in bytes
    pub fn min_line_len(mut self, len: usize) -> Self {
        self.min_line_len = len;
        self
    }

    /// Partition the lines of `reader` into per-prefix groups, flushing
    /// each completed group through `sink`.
    ///
    /// Grouping is contiguous: the input must already be sorted by its
    /// first `prefix_width` characters. A prefix that recurs after a gap
    /// flushes again and overwrites the earlier range file.
    ///
    /// `progress` is an observability hook, not part of the data
    /// contract: it receives each prefix as its group opens, and the
    /// final prefix once more after the terminal flush.
    pub fn split<R, S, F>(
        &self,
        reader: R,
        sink: &mut S,
        mut progress: F,
    ) -> Result<SplitStats, SplitError>
    where
        R: BufRead,
        S: RangeSink,
        F: FnMut(&str),
    {
        let mut stats = SplitStats::default();
        let mut current: Option<Group> = None;

        for line in reader.lines() {
            let line = line.map_err(SplitError::SourceRead)?;
            stats.lines_read += 1;

            // Noise lines leave the open group untouched
            let Some(record) = Record::split(&line, self.prefix_width, self.min_line_len) else {
                stats.lines_skipped += 1;
                continue;
            };

            match current.as_mut() {
                Some(group) if group.prefix == record.prefix => {
                    group.push(record.suffix);
                }
                _ => {
                    // Prefix changed: the previous group is complete
                    if let Some(done) = current.take() {
                        done.flush(sink)?;
                        stats.ranges_written += 1;
                    }

                    progress(record.prefix);
                    current = Some(Group::open(record));
                }
            }
        }

        // Terminal flush; absent when no line ever opened a group
        if let Some(done) = current.take() {
            done.flush(sink)?;
            stats.ranges_written += 1;
            progress(&done.prefix);
        }

        Ok(stats)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    fn open(record: Record<'_>) -> Self {
        let mut group = Self {
            prefix: record.prefix.to_string(),
            body: String::new(),
        };
        group.push(record.suffix);
        group
    }

    fn push(&mut self, suffix: &str) {
        self.body.push_str(suffix);
        self.body.push('\n');
    }

    /// Write the accumulated body under this group's prefix: surrounding
    /// whitespace trimmed, single trailing newline.
    fn flush<S: RangeSink>(&self, sink: &mut S) -> Result<(), SplitError> {
        let mut body = self.body.trim().to_string();
        body.push('\n');
        sink.flush_range(&self.prefix, &body)
    }
}
