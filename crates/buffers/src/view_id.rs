//! Caller-assigned view identifier.

use std::fmt;

/// Opaque tag a caller attaches to a [`ByteView`](crate::ByteView).
///
/// The view never interprets it. Consumers use it to tell which logical
/// destination a view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(i32);

impl ViewId {
    /// No identifier assigned.
    pub const UNSET: ViewId = ViewId(-1);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn is_set(self) -> bool {
        self.0 != Self::UNSET.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<i32> for ViewId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "unset")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert_eq!(ViewId::default(), ViewId::UNSET);
        assert!(!ViewId::default().is_set());
        assert_eq!(ViewId::UNSET.to_string(), "unset");
    }

    #[test]
    fn test_assigned() {
        let id = ViewId::from(42);
        assert!(id.is_set());
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
