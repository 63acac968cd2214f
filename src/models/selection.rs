//! Gallery selection state: type filter, category filter and the
//! lightbox cursor.
//!
//! These are the transient pieces the navigator resets on navigation
//! events; the catalog itself never changes.

/// Landing-page filter over catalog types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Union of every type.
    #[default]
    All,
    /// Exactly one type key.
    One(String),
}

/// Detail-page filter over a model's categories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Concatenation of all category buckets in key order.
    #[default]
    All,
    /// Exactly one category bucket.
    One(String),
}

/// Lightbox cursor: closed, or an index into the active sequence.
///
/// Stepping wraps around modulo the sequence length and is a no-op on
/// an empty sequence, so an open cursor is always in bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open(i) => Some(*i),
        }
    }

    /// Step forward with wraparound.
    pub fn next(self, len: usize) -> Self {
        match self {
            Self::Open(i) if len > 0 => Self::Open((i + 1) % len),
            other => other,
        }
    }

    /// Step backward with wraparound.
    pub fn prev(self, len: usize) -> Self {
        match self {
            Self::Open(i) if len > 0 => Self::Open((i + len - 1) % len),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_around() {
        assert_eq!(LightboxState::Open(2).next(3), LightboxState::Open(0));
        assert_eq!(LightboxState::Open(0).prev(3), LightboxState::Open(2));
        assert_eq!(LightboxState::Open(1).next(3), LightboxState::Open(2));
        assert_eq!(LightboxState::Open(1).prev(3), LightboxState::Open(0));
    }

    #[test]
    fn stepping_an_empty_sequence_is_a_no_op() {
        assert_eq!(LightboxState::Open(0).next(0), LightboxState::Open(0));
        assert_eq!(LightboxState::Open(0).prev(0), LightboxState::Open(0));
    }

    #[test]
    fn stepping_a_closed_lightbox_stays_closed() {
        assert_eq!(LightboxState::Closed.next(5), LightboxState::Closed);
        assert_eq!(LightboxState::Closed.prev(5), LightboxState::Closed);
    }

    #[test]
    fn index_stays_in_bounds_under_any_walk() {
        let len = 4;
        let mut state = LightboxState::Open(0);
        for step in 0..100 {
            state = if step % 3 == 0 {
                state.prev(len)
            } else {
                state.next(len)
            };
            assert!(state.index().expect("open") < len);
        }
    }
}
