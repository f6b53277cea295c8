//! Keywise structural merge for mapping types.
//!
//! Merging folds `other` into `self`, one key at a time:
//!
//! - a key missing from `self` is inserted with a clone of `other`'s value,
//!   and always counts as a change — a missing key stands for its value
//!   type's bottom, and the key's presence is itself new information;
//! - a key present in both has `other`'s value merged into the entry in
//!   place;
//! - keys present only in `self` are left alone.
//!
//! `other` is never modified, and a repeat merge of the same source reports
//! no change.

use alloc::collections::BTreeMap;

use crate::Merge;

impl<K, V> Merge for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Merge + Clone,
{
    fn merge(&mut self, other: &Self) -> bool {
        let mut changed = false;
        for (key, theirs) in other {
            match self.get_mut(key) {
                Some(ours) => changed |= ours.merge(theirs),
                None => {
                    self.insert(key.clone(), theirs.clone());
                    changed = true;
                }
            }
        }
        changed
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Merge for std::collections::HashMap<K, V, S>
where
    K: Eq + core::hash::Hash + Clone,
    V: Merge + Clone,
    S: core::hash::BuildHasher,
{
    fn merge(&mut self, other: &Self) -> bool {
        let mut changed = false;
        for (key, theirs) in other {
            match self.get_mut(key) {
                Some(ours) => changed |= ours.merge(theirs),
                None => {
                    self.insert(key.clone(), theirs.clone());
                    changed = true;
                }
            }
        }
        changed
    }
}
