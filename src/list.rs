use crate::errors::ListError;

/// An ordered, index-addressable, duplicate-permitting sequence.
///
/// Elements are stored as `Option<E>` so an absent value is itself a
/// storable element: `None` matches only `None`, `Some` matches by
/// value equality on `E`.
pub trait List<E: PartialEq + Clone> {
    /// Number of live elements. O(1).
    fn size(&self) -> usize;

    /// Append `value` at the logical end.
    fn add(&mut self, value: Option<E>);

    /// Element at `index`.
    ///
    /// Error if `index >= size`.
    fn get(&self, index: usize) -> Result<Option<&E>, ListError>;

    /// Is some element equal to `value`?
    fn contains(&self, value: Option<&E>) -> bool;

    /// Remove the first element equal to `value`; no-op when absent.
    fn remove(&mut self, value: Option<&E>);

    /// Append every element of `other`, in `other`'s order. `other` is
    /// left untouched.
    fn add_all(&mut self, other: &dyn List<E>);

    /// Ordered snapshot of the elements, detached from the list.
    fn to_vec(&self) -> Vec<Option<E>>;

    /// Is the list empty?
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Absent-aware element match: `None` only pairs with `None`.
pub(crate) fn item_matches<E: PartialEq>(probe: Option<&E>, item: &Option<E>) -> bool {
    match (probe, item) {
        (None, None) => true,
        (Some(probe), Some(item)) => probe == item,
        _ => false,
    }
}
