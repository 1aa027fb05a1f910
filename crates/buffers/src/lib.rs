//! Byte buffer primitives for text formatting.
//!
//! Formatting routines write their output into buffers allocated up front.
//! This crate provides the checked window they write through, so the
//! routines themselves never re-validate bounds.
//!
//! # Overview
//!
//! - [`ByteView`] - A non-owning, bounds-checked view over caller-owned bytes
//! - [`ViewId`] - An opaque tag a caller attaches to a view
//! - [`ViewError`] - Recoverable errors from copies, slices and splits
//!
//! Indexed access ([`ByteView::get`], [`ByteView::set`]) faults on an
//! out-of-range index instead of returning an error. Enable the
//! `abort-on-fault` feature to turn those faults into a process abort.
//!
//! # Example
//!
//! ```
//! use text_formatting_buffers::{ByteView, ViewId};
//!
//! let mut buf = [b' '; 8];
//! let view = ByteView::with_id(&mut buf, ViewId::new(1));
//!
//! // Hand out disjoint regions to two writers.
//! let (mut key, mut value) = view.split_at(4).unwrap();
//! key.copy_from(b"id=").unwrap();
//! value.copy_from(b"42").unwrap();
//! value.set(2, b';');
//!
//! assert_eq!(&buf, b"id= 42; ");
//! ```

mod byte_view;
mod error;
mod fault;
mod octets;
mod view_id;

pub use byte_view::ByteView;
pub use error::ViewError;
pub use octets::print_octets;
pub use view_id::ViewId;
