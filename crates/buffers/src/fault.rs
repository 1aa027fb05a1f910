//! Fatal fault path for out-of-range indexed access.
//!
//! Indexed reads and writes happen once per emitted byte, so an
//! out-of-range index is treated as a defect rather than a condition to
//! recover from. The default build panics with an `OUT_OF_BOUNDS` message;
//! the `abort-on-fault` feature terminates the process outright.

/// Reports an indexed access at `index` into a view of `length` bytes.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_bounds(index: usize, length: usize) -> ! {
    log::error!("byte view index {index} out of range for length {length}");
    if cfg!(feature = "abort-on-fault") {
        std::process::abort();
    }
    panic!("OUT_OF_BOUNDS: index {index} >= length {length}")
}

#[cfg(all(test, not(feature = "abort-on-fault")))]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "OUT_OF_BOUNDS: index 7 >= length 3")]
    fn test_out_of_bounds_message() {
        out_of_bounds(7, 3);
    }
}
