//! Hex rendering of view contents for debug output.

use std::fmt;

/// Number of bytes shown before the output is truncated.
pub(crate) const DEBUG_OCTETS: usize = 16;

/// Displays up to `max` bytes as space-separated lowercase hex.
///
/// Longer inputs end with `... (N more)`.
pub(crate) struct Octets<'a> {
    pub(crate) bytes: &'a [u8],
    pub(crate) max: usize,
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        if self.bytes.len() > self.max {
            write!(f, "... ({} more)", self.bytes.len() - self.max)?;
        }
        Ok(())
    }
}

/// Formats `bytes` the way [`ByteView`](crate::ByteView)'s `Debug` does.
///
/// # Example
///
/// ```
/// use text_formatting_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(bytes: &[u8], max: usize) -> String {
    Octets { bytes, max }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        assert_eq!(print_octets(&[0x7f], 16), "7f");
    }

    #[test]
    fn test_truncated() {
        let data: Vec<u8> = (0..20).collect();
        assert_eq!(
            print_octets(&data, 4),
            "00 01 02 03... (16 more)"
        );
    }

    #[test]
    fn test_zero_max() {
        assert_eq!(print_octets(&[1, 2], 0), "... (2 more)");
    }
}
