//! Bounds-checked view over a caller-owned byte region.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

use crate::error::ViewError;
use crate::fault;
use crate::octets::{Octets, DEBUG_OCTETS};
use crate::view_id::ViewId;

/// A non-owning, fixed-length window onto bytes that live somewhere else.
///
/// Formatting routines write their output through views handed out over one
/// pre-allocated buffer. The view never grows, frees or relocates that
/// buffer; the lifetime `'a` ties it to the owner.
///
/// Two kinds of failure are kept apart:
///
/// - [`get`](Self::get), [`set`](Self::set) and indexing treat an
///   out-of-range index as a defect and fault (`OUT_OF_BOUNDS` panic, or a
///   process abort with the `abort-on-fault` feature).
/// - Copies, slices and splits return a [`ViewError`] the caller can handle,
///   and leave the view untouched when they do.
///
/// # Example
///
/// ```
/// use text_formatting_buffers::ByteView;
///
/// let mut buf = [10, 20, 30, 40, 50];
/// let mut view = ByteView::new(&mut buf);
///
/// assert_eq!(view.slice(2).unwrap().as_bytes(), &[30, 40, 50]);
/// assert_eq!(view.slice_range(1, 2).unwrap().as_bytes(), &[20, 30]);
///
/// view.copy_from(&[99, 98]).unwrap();
/// assert_eq!(buf, [99, 98, 30, 40, 50]);
/// ```
pub struct ByteView<'a> {
    bytes: &'a mut [u8],
    id: ViewId,
}

impl<'a> ByteView<'a> {
    /// Wraps `bytes` with no identifier.
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self::with_id(bytes, ViewId::UNSET)
    }

    /// Wraps `bytes` and tags the view with `id`.
    #[inline]
    pub fn with_id(bytes: &'a mut [u8], id: ViewId) -> Self {
        Self { bytes, id }
    }

    /// Wraps `length` bytes starting at `pointer`.
    ///
    /// A null `pointer` is accepted when `length` is zero.
    ///
    /// # Safety
    ///
    /// For all of `'a`, `pointer` must be valid for reads and writes of
    /// `length` bytes, and those bytes must not be accessed through any
    /// other path while the view (or anything sliced from it) is alive.
    /// `length` must not exceed `isize::MAX`.
    pub unsafe fn from_raw_parts(pointer: *mut u8, length: usize, id: ViewId) -> Self {
        let pointer = if length == 0 && pointer.is_null() {
            NonNull::dangling().as_ptr()
        } else {
            pointer
        };
        // SAFETY: upheld by the caller as documented above.
        let bytes = unsafe { std::slice::from_raw_parts_mut(pointer, length) };
        Self { bytes, id }
    }

    /// Number of bytes in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The caller-assigned identifier, [`ViewId::UNSET`] for slices.
    #[inline]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Reads the byte at `index`.
    ///
    /// # Panics
    ///
    /// Faults with `OUT_OF_BOUNDS` when `index >= len()`.
    #[inline]
    #[track_caller]
    pub fn get(&self, index: usize) -> u8 {
        match self.bytes.get(index) {
            Some(&byte) => byte,
            None => fault::out_of_bounds(index, self.len()),
        }
    }

    /// Writes `value` at `index`.
    ///
    /// # Panics
    ///
    /// Faults with `OUT_OF_BOUNDS` when `index >= len()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, index: usize, value: u8) {
        let length = self.len();
        match self.bytes.get_mut(index) {
            Some(byte) => *byte = value,
            None => fault::out_of_bounds(index, length),
        }
    }

    /// Overwrites the first `source.len()` bytes with `source`.
    ///
    /// Bytes past `source.len()` keep their values. Nothing is written when
    /// the source does not fit.
    pub fn copy_from(&mut self, source: &[u8]) -> Result<(), ViewError> {
        if source.len() > self.len() {
            return Err(ViewError::source_too_large(source.len(), self.len()));
        }
        self.bytes[..source.len()].copy_from_slice(source);
        Ok(())
    }

    /// Overwrites the first `source_len` bytes with bytes read from `source`.
    ///
    /// Same contract as [`copy_from`](Self::copy_from) for callers holding a
    /// raw region.
    ///
    /// # Safety
    ///
    /// When `source_len` fits in the view, `source` must be valid for reads
    /// of `source_len` bytes and must not overlap the view.
    pub unsafe fn copy_from_raw(
        &mut self,
        source: *const u8,
        source_len: usize,
    ) -> Result<(), ViewError> {
        if source_len > self.len() {
            return Err(ViewError::source_too_large(source_len, self.len()));
        }
        if source_len == 0 {
            return Ok(());
        }
        // SAFETY: the destination holds at least `source_len` bytes; the
        // caller vouches for the source and for non-overlap.
        unsafe { ptr::copy_nonoverlapping(source, self.bytes.as_mut_ptr(), source_len) };
        Ok(())
    }

    /// Address of the first byte.
    ///
    /// Anything done through the pointer bypasses the view's checks.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Mutable address of the first byte, for routines that copy in bulk.
    ///
    /// Anything done through the pointer bypasses the view's checks.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }

    /// A shorter-lived view over the same bytes, keeping the id.
    #[inline]
    pub fn reborrow(&mut self) -> ByteView<'_> {
        ByteView {
            bytes: &mut *self.bytes,
            id: self.id,
        }
    }

    /// View over `[start, len())`.
    ///
    /// Requires `start < len()`; in particular slicing at the very end is
    /// rejected.
    pub fn slice(&mut self, start: usize) -> Result<ByteView<'_>, ViewError> {
        self.reborrow().into_slice(start)
    }

    /// View over `[start, start + count)`.
    ///
    /// Requires `start + count <= len()`, so a slice may end exactly at the
    /// end of the view.
    pub fn slice_range(&mut self, start: usize, count: usize) -> Result<ByteView<'_>, ViewError> {
        self.reborrow().into_slice_range(start, count)
    }

    /// Consuming form of [`slice`](Self::slice) that keeps the full lifetime.
    pub fn into_slice(self, start: usize) -> Result<ByteView<'a>, ViewError> {
        let length = self.len();
        if start >= length {
            return Err(ViewError::slice_start(start, length));
        }
        Ok(ByteView::new(&mut self.bytes[start..]))
    }

    /// Consuming form of [`slice_range`](Self::slice_range).
    pub fn into_slice_range(self, start: usize, count: usize) -> Result<ByteView<'a>, ViewError> {
        let length = self.len();
        match start.checked_add(count) {
            Some(end) if end <= length => Ok(ByteView::new(&mut self.bytes[start..end])),
            _ => Err(ViewError::slice_range(start, count, length)),
        }
    }

    /// Splits into `[0, mid)` and `[mid, len())`.
    ///
    /// The halves never overlap, so they can be filled independently (for
    /// example from different threads). Both come back with no id.
    pub fn split_at(self, mid: usize) -> Result<(ByteView<'a>, ByteView<'a>), ViewError> {
        let length = self.len();
        if mid > length {
            return Err(ViewError::split(mid, length));
        }
        let (head, tail) = self.bytes.split_at_mut(mid);
        Ok((ByteView::new(head), ByteView::new(tail)))
    }
}

impl Index<usize> for ByteView<'_> {
    type Output = u8;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &u8 {
        match self.bytes.get(index) {
            Some(byte) => byte,
            None => fault::out_of_bounds(index, self.len()),
        }
    }
}

impl IndexMut<usize> for ByteView<'_> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        let length = self.len();
        match self.bytes.get_mut(index) {
            Some(byte) => byte,
            None => fault::out_of_bounds(index, length),
        }
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets = Octets {
            bytes: self.as_bytes(),
            max: DEBUG_OCTETS,
        };
        f.debug_struct("ByteView")
            .field("id", &format_args!("{}", self.id))
            .field("len", &self.len())
            .field("bytes", &format_args!("[{}]", octets))
            .finish()
    }
}
