use crate::network::family::FamilyFilter;

/// Capacity of the output buffer when none is configured.
pub const DEFAULT_OUTPUT_BUFFER: usize = 32 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Families that are written to the output.
    pub filter: FamilyFilter,
    /// Size of the buffered writer in front of the output sink, in bytes.
    ///
    /// The writer is always flushed before a run returns.
    pub output_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FamilyFilter::ALL,
            output_buffer: DEFAULT_OUTPUT_BUFFER,
        }
    }
}
