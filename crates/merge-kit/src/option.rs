//! `Option<T>` as a lattice with `None` at the bottom.
//!
//! A target that does not exist yet behaves like the bottom element: merging
//! a source into `None` instantiates `T`'s default value and merges into
//! that, so the reported change reflects only how far the source lifts the
//! value above bottom. In particular `None` absorbing an empty map becomes
//! `Some(empty)` without reporting a change — the two states carry the same
//! information.

use crate::Merge;

impl<T: Merge + Default> Merge for Option<T> {
    fn merge(&mut self, other: &Self) -> bool {
        let theirs = match other {
            Some(theirs) => theirs,
            None => return false,
        };
        match self {
            Some(ours) => ours.merge(theirs),
            None => {
                let mut value = T::default();
                let changed = value.merge(theirs);
                *self = Some(value);
                changed
            }
        }
    }
}
