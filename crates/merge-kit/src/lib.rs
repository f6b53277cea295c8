//! # merge-kit
//!
//! A generic merge engine for types whose values form a **join-semilattice**
//! — the algebra behind state-based CRDTs.
//!
//! Two replicas that update independently and later exchange states converge
//! to the same value as long as merging computes a least upper bound: an
//! operation that is commutative, associative, and idempotent. This crate
//! provides that operation generically, for types you define, instead of a
//! fixed menu of CRDT objects.
//!
//! ## How values merge
//!
//! A merge of `other` into `self` is resolved by ordinary trait dispatch, in
//! this effective priority order:
//!
//! - A hand-written [`Merge`] impl always wins. Use one for a non-default
//!   lattice: a decreasing counter, a bounded set, anything whose join is not
//!   the structural one.
//! - Structs get a fieldwise merge with [`#[derive(Merge)]`](derive@Merge):
//!   every field is merged with its counterpart, and the struct changed if
//!   any field changed.
//! - [`BTreeMap`](alloc::collections::BTreeMap) and
//!   [`HashMap`](std::collections::HashMap) merge keywise: keys missing from
//!   `self` are inserted, keys present in both have their values merged,
//!   keys only in `self` are left alone.
//! - `Option` treats `None` as the bottom element.
//! - `bool`, the integer types, `f32`/`f64`, `char`, and `String` merge by
//!   taking the maximum under their natural ordering.
//! - Everything else (`Vec`, arbitrary object graphs, …) does not implement
//!   [`Merge`] and fails to compile. An open-ended collection has no
//!   canonical join; give it one with a hand-written impl.
//!
//! The zero value ([`Default`]) is the bottom of every lattice built this
//! way: `join(&x, &T::default()) == x` for all `x`.
//!
//! ## Quick Start
//!
//! ```
//! use merge_kit::prelude::*;
//! use std::collections::BTreeMap;
//!
//! #[derive(Debug, Default, Clone, PartialEq, Merge)]
//! struct Stats {
//!     page_views: BTreeMap<String, u64>,
//!     banner_seen: bool,
//! }
//!
//! let mut phone = Stats::default();
//! phone.page_views.insert("home".into(), 3);
//!
//! let mut laptop = Stats::default();
//! laptop.page_views.insert("home".into(), 5);
//! laptop.banner_seen = true;
//!
//! // Fold laptop's state into phone's. Order does not matter.
//! let changed = phone.merge(&laptop);
//! assert!(changed);
//! assert_eq!(phone.page_views["home"], 5);
//! assert!(phone.banner_seen);
//! ```
//!
//! ## The `Merge` trait
//!
//! [`Merge::merge`] mutates the target in place and reports whether it
//! changed, so callers can stop propagating states that carry no new
//! information. [`join`] is the pure two-value form; [`join_all`] folds any
//! number of replica states onto the bottom value.
//!
//! ## `no_std` Support
//!
//! This crate supports `no_std` environments with the `alloc` crate. Disable
//! the default `std` feature; `HashMap` merging requires `std`.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod map;
mod merge;
mod option;
mod scalar;
mod tuple;

pub mod prelude;

pub use merge::{join, join_all, Merge};

/// Derive macro for [`Merge`], re-exported from `merge-kit-macros`.
#[cfg(feature = "macros")]
pub use merge_kit_macros::Merge;
