use anyhow::{Context, Result};
use std::num::NonZeroUsize;

/// Maximum number of value tuples sharing one INSERT statement
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Relation type written for definitions that carry no tag
pub const RELATION_TYPE_PLACEHOLDER: &str = "-";

/// Buffer size for the SQL output writer
pub const WRITE_BUFFER_SIZE: usize = 256 * 1024;

/// Buffer size for the corpus reader
pub const READ_BUFFER_SIZE: usize = 128 * 1024;

/// Progress update interval (tick every N entries while reading)
pub const PROGRESS_INTERVAL: usize = 1000;

/// Validates a user-supplied batch size. Zero would leave every row without a
/// statement, so it is rejected before any work starts.
pub fn batch_size(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n).context("--batch-size must be at least 1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_batch_size_is_rejected() {
        let err = batch_size(0).unwrap_err();
        assert_eq!(err.to_string(), "--batch-size must be at least 1");
    }

    #[test]
    fn positive_batch_sizes_pass_through() {
        assert_eq!(batch_size(1).unwrap().get(), 1);
        assert_eq!(batch_size(DEFAULT_BATCH_SIZE).unwrap().get(), 1000);
    }
}
