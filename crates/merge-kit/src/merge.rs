/// A value that can be merged, in place, with another value of the same type.
///
/// Merging sets `self` to the **least upper bound** of `self` and `other`
/// within the type's join-semilattice.
///
/// # Properties
///
/// All implementations must satisfy:
/// - **Commutativity:** merging `a` into `b` and `b` into `a` produce equal
///   values
/// - **Associativity:** `join(&join(&a, &b), &c) == join(&a, &join(&b, &c))`
/// - **Idempotency:** merging a value into an equal one changes nothing
///
/// Implementations obtained from [`#[derive(Merge)]`](derive@crate::Merge)
/// and from the impls this crate provides uphold the laws whenever their
/// constituent types do; hand-written impls are on their own. The same goes
/// for the bottom element: if the type is used with [`join`], its
/// [`Default`] value must be the lattice bottom, i.e. merging the default
/// into any value must change nothing.
pub trait Merge {
    /// Merge another value's state into this one.
    ///
    /// After merging, `self` is the least upper bound of both values; `other`
    /// is never modified. Returns `true` if `self` changed, which makes
    /// no-op merges detectable — a replica receiving a state that changes
    /// nothing has no reason to propagate it further.
    ///
    /// # Example
    ///
    /// ```
    /// use merge_kit::Merge;
    ///
    /// let mut highest_bid = 40_u64;
    /// assert!(highest_bid.merge(&75));
    /// assert!(!highest_bid.merge(&60));
    /// assert_eq!(highest_bid, 75);
    /// ```
    fn merge(&mut self, other: &Self) -> bool;
}

/// Returns the least upper bound of `a` and `b` as a new value.
///
/// Equivalent to merging `a` and then `b` into a fresh [`Default`] value, so
/// the default must be the bottom element of `T`'s lattice (it is, for every
/// impl this crate provides or derives). Neither input is modified.
///
/// # Example
///
/// ```
/// use merge_kit::join;
///
/// assert_eq!(join(&3, &5), 5);
/// assert_eq!(join(&String::from("bar"), &String::from("foo")), "foo");
/// assert_eq!(join(&true, &false), true);
/// ```
pub fn join<T: Merge + Default>(a: &T, b: &T) -> T {
    let mut value = T::default();
    value.merge(a);
    value.merge(b);
    value
}

/// Folds any number of values into their least upper bound.
///
/// The typical sync pattern: collect the states of every reachable replica
/// and reduce them to one. An empty iterator yields the bottom element.
///
/// # Example
///
/// ```
/// use merge_kit::join_all;
///
/// let replicas = vec![3_u32, 7, 5];
/// assert_eq!(join_all(replicas), 7);
/// assert_eq!(join_all(Vec::<u32>::new()), 0);
/// ```
pub fn join_all<T, I>(values: I) -> T
where
    T: Merge + Default,
    I: IntoIterator<Item = T>,
{
    let mut result = T::default();
    for value in values {
        result.merge(&value);
    }
    result
}
