//! Elementwise merge for tuples, the anonymous-record counterpart of
//! `#[derive(Merge)]`. Implemented for arities 1 through 8.

use crate::Merge;

macro_rules! impl_merge_tuple {
    ($($name:ident => $idx:tt),+) => {
        impl<$($name: Merge),+> Merge for ($($name,)+) {
            fn merge(&mut self, other: &Self) -> bool {
                let mut changed = false;
                $(changed |= self.$idx.merge(&other.$idx);)+
                changed
            }
        }
    };
}

impl_merge_tuple!(A => 0);
impl_merge_tuple!(A => 0, B => 1);
impl_merge_tuple!(A => 0, B => 1, C => 2);
impl_merge_tuple!(A => 0, B => 1, C => 2, D => 3);
impl_merge_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_merge_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_merge_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_merge_tuple!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
