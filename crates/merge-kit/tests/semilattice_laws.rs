//! Property-based tests for the semilattice laws.
//!
//! Every impl the crate provides or derives must satisfy commutativity,
//! associativity, and idempotence, must treat the default value as the
//! lattice bottom, and must report a change exactly when the target moved.

use std::collections::BTreeMap;

use merge_kit::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Merge)]
struct Replica {
    hits: BTreeMap<u8, u32>,
    tag: String,
    live: bool,
}

fn replica_strategy() -> impl Strategy<Value = Replica> {
    (
        prop::collection::btree_map(any::<u8>(), any::<u32>(), 0..6),
        "[a-z]{0,6}",
        any::<bool>(),
    )
        .prop_map(|(hits, tag, live)| Replica { hits, tag, live })
}

fn map_strategy() -> impl Strategy<Value = BTreeMap<u8, u32>> {
    prop::collection::btree_map(any::<u8>(), any::<u32>(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // ── scalars ──────────────────────────────────────────────────────

    #[test]
    fn u64_join_commutative(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(join(&a, &b), join(&b, &a));
    }

    #[test]
    fn u64_join_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        prop_assert_eq!(join(&join(&a, &b), &c), join(&a, &join(&b, &c)));
    }

    #[test]
    fn u64_merge_idempotent(a in any::<u64>()) {
        let mut target = a;
        prop_assert!(!target.merge(&a));
        prop_assert_eq!(target, a);
    }

    #[test]
    fn u64_bottom_is_identity(a in any::<u64>()) {
        prop_assert_eq!(join(&a, &u64::default()), a);
    }

    #[test]
    fn string_join_commutative(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(join(&a, &b), join(&b, &a));
    }

    #[test]
    fn string_bottom_is_identity(a in "\\PC{0,12}") {
        prop_assert_eq!(join(&a, &String::new()), a);
    }

    #[test]
    fn i32_changed_flag_matches_movement(a in any::<i32>(), b in any::<i32>()) {
        let mut target = a;
        let changed = target.merge(&b);
        prop_assert_eq!(changed, target != a);
    }

    // ── maps ─────────────────────────────────────────────────────────

    #[test]
    fn map_join_commutative(a in map_strategy(), b in map_strategy()) {
        prop_assert_eq!(join(&a, &b), join(&b, &a));
    }

    #[test]
    fn map_join_associative(a in map_strategy(), b in map_strategy(), c in map_strategy()) {
        prop_assert_eq!(join(&join(&a, &b), &c), join(&a, &join(&b, &c)));
    }

    #[test]
    fn map_merge_idempotent(a in map_strategy()) {
        let mut target = a.clone();
        prop_assert!(!target.merge(&a));
        prop_assert_eq!(target, a);
    }

    #[test]
    fn map_bottom_is_identity(a in map_strategy()) {
        prop_assert_eq!(join(&a, &BTreeMap::new()), a);
    }

    #[test]
    fn map_changed_flag_matches_movement(a in map_strategy(), b in map_strategy()) {
        let mut target = a.clone();
        let changed = target.merge(&b);
        prop_assert_eq!(changed, target != a);
    }

    // ── derived structs ──────────────────────────────────────────────

    #[test]
    fn replica_join_commutative(a in replica_strategy(), b in replica_strategy()) {
        prop_assert_eq!(join(&a, &b), join(&b, &a));
    }

    #[test]
    fn replica_join_associative(
        a in replica_strategy(),
        b in replica_strategy(),
        c in replica_strategy(),
    ) {
        prop_assert_eq!(join(&join(&a, &b), &c), join(&a, &join(&b, &c)));
    }

    #[test]
    fn replica_merge_idempotent(a in replica_strategy()) {
        let mut target = a.clone();
        prop_assert!(!target.merge(&a));
        prop_assert_eq!(target, a);
    }

    #[test]
    fn replica_bottom_is_identity(a in replica_strategy()) {
        prop_assert_eq!(join(&a, &Replica::default()), a);
    }

    #[test]
    fn replica_changed_flag_matches_movement(a in replica_strategy(), b in replica_strategy()) {
        let mut target = a.clone();
        let changed = target.merge(&b);
        prop_assert_eq!(changed, target != a);
    }

    #[test]
    fn replica_merge_order_does_not_matter(
        a in replica_strategy(),
        b in replica_strategy(),
        c in replica_strategy(),
    ) {
        let mut forward = a.clone();
        forward.merge(&b);
        forward.merge(&c);

        let mut backward = c.clone();
        backward.merge(&b);
        backward.merge(&a);

        prop_assert_eq!(forward, backward);
    }

    // ── option ───────────────────────────────────────────────────────

    #[test]
    fn option_join_commutative(a in any::<Option<u64>>(), b in any::<Option<u64>>()) {
        prop_assert_eq!(join(&a, &b), join(&b, &a));
    }

    #[test]
    fn option_none_is_bottom(a in any::<Option<u64>>()) {
        prop_assert_eq!(join(&a, &None), a);
    }
}
