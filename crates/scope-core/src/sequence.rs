//! Persistent sequence helpers
//!
//! Index lookup and copy-on-write splicing over [`im::Vector`]. Every helper
//! returns a new sequence and leaves its input untouched.

use im::Vector;

/// Index of the first item matching `predicate`
#[inline]
pub fn find_index<T: Clone>(seq: &Vector<T>, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    seq.iter().position(predicate)
}

/// Copy of `seq` with the item at `index` replaced by `item`
///
/// # Panics
/// Panics if `index` is out of bounds
#[inline]
#[must_use]
pub fn with_updated_item_at<T: Clone>(seq: &Vector<T>, index: usize, item: T) -> Vector<T> {
    seq.update(index, item)
}

/// Copy of `seq` without the item at `index`
///
/// # Panics
/// Panics if `index` is out of bounds
#[inline]
#[must_use]
pub fn without_item_at<T: Clone>(seq: &Vector<T>, index: usize) -> Vector<T> {
    let mut next = seq.clone();
    next.remove(index);
    next
}

/// Copy of `seq` with `item` appended
#[inline]
#[must_use]
pub fn with_item_appended<T: Clone>(seq: &Vector<T>, item: T) -> Vector<T> {
    let mut next = seq.clone();
    next.push_back(item);
    next
}
