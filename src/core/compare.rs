//! First-class predicates and comparators
//!
//! Filters and orderings are plain values so they can be built from a query,
//! combined, and handed to a store in one call.

use std::cmp::Ordering;
use std::sync::Arc;

/// A shareable filter over `T`
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A shareable total ordering over `T`
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Predicate accepting everything
pub fn always<T: 'static>() -> Predicate<T> {
    Arc::new(|_| true)
}

/// Logical AND of two predicates, short-circuiting on the left
pub fn and<T: 'static>(left: Predicate<T>, right: Predicate<T>) -> Predicate<T> {
    Arc::new(move |value| left(value) && right(value))
}

/// Order by `first`, falling back to `second` on ties
pub fn then<T: 'static>(first: Comparator<T>, second: Comparator<T>) -> Comparator<T> {
    Arc::new(move |a, b| first(a, b).then_with(|| second(a, b)))
}

/// Reverse a whole comparator, tie-breaks included
pub fn reversed<T: 'static>(comparator: Comparator<T>) -> Comparator<T> {
    Arc::new(move |a, b| comparator(b, a))
}

/// Compare optional values with `None` after every present value
pub fn nulls_last<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare optional values with `None` before every present value
pub fn nulls_first<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    a.cmp(&b)
}
