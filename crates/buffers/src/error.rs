//! Recoverable precondition errors for byte view operations.

use thiserror::Error;

/// A rejected request on a [`ByteView`](crate::ByteView).
///
/// Returned by the operations whose sizes usually come from outside the
/// formatting routine (copies and slicing). The view is untouched when one
/// of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("source of {source_len} bytes does not fit in view of length {len}")]
    SourceTooLarge { source_len: usize, len: usize },
    #[error("slice start {start} out of range for view of length {len}")]
    SliceStartOutOfRange { start: usize, len: usize },
    #[error("slice of {count} bytes at {start} out of range for view of length {len}")]
    SliceRangeOutOfRange {
        start: usize,
        count: usize,
        len: usize,
    },
    #[error("split point {mid} out of range for view of length {len}")]
    SplitOutOfRange { mid: usize, len: usize },
}

impl ViewError {
    pub(crate) fn source_too_large(source_len: usize, len: usize) -> Self {
        log::debug!("copy rejected: {source_len} source bytes, view length {len}");
        ViewError::SourceTooLarge { source_len, len }
    }

    pub(crate) fn slice_start(start: usize, len: usize) -> Self {
        log::debug!("slice rejected: start {start}, view length {len}");
        ViewError::SliceStartOutOfRange { start, len }
    }

    pub(crate) fn slice_range(start: usize, count: usize, len: usize) -> Self {
        log::debug!("slice rejected: start {start}, count {count}, view length {len}");
        ViewError::SliceRangeOutOfRange { start, count, len }
    }

    pub(crate) fn split(mid: usize, len: usize) -> Self {
        log::debug!("split rejected: mid {mid}, view length {len}");
        ViewError::SplitOutOfRange { mid, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ViewError::source_too_large(6, 5).to_string(),
            "source of 6 bytes does not fit in view of length 5"
        );
        assert_eq!(
            ViewError::slice_start(5, 5).to_string(),
            "slice start 5 out of range for view of length 5"
        );
        assert_eq!(
            ViewError::slice_range(3, 4, 5).to_string(),
            "slice of 4 bytes at 3 out of range for view of length 5"
        );
        assert_eq!(
            ViewError::split(9, 5).to_string(),
            "split point 9 out of range for view of length 5"
        );
    }
}
