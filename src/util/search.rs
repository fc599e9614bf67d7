/// Returns the index of the first element in `sequence[..length]` equal to
/// `target`, or `None` when nothing matches.
///
/// Only the first `length` elements are examined. A `length` larger than the
/// slice is clamped to the slice, so the scan never reads past either bound.
///
/// # Example
/// ```
/// use memcalc::util::search::search;
///
/// let values = [5, 3, 5];
/// assert_eq!(search(&values, values.len(), &5), Some(0));
/// assert_eq!(search(&values, values.len(), &9), None);
///
/// // Elements past the declared length are ignored.
/// assert_eq!(search(&values, 1, &3), None);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(search(&empty, 0, &1), None);
/// ```
pub fn search<T: PartialEq>(sequence: &[T], length: usize, target: &T) -> Option<usize> {
    sequence.iter().take(length).position(|element| element == target)
}
