//! Order-independent sequence comparison.

/// Returns `true` when both slices hold the same elements, ignoring order.
///
/// Duplicates count: `[a, a, b]` and `[a, b, b]` are not equal. Both inputs
/// are compared through independently sorted views and neither is modified.
///
/// # Examples
///
/// ```
/// use quiz_shuffle::arrays_equal;
///
/// assert!(arrays_equal(&["x", "y"], &["y", "x"]));
/// assert!(!arrays_equal(&["x", "y"], &["x", "z"]));
/// ```
#[must_use]
pub fn arrays_equal<T: Ord>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    sorted_view(left) == sorted_view(right)
}

fn sorted_view<T: Ord>(items: &[T]) -> Vec<&T> {
    let mut view: Vec<&T> = items.iter().collect();
    view.sort_unstable();
    view
}
