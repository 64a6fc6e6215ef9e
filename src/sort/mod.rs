mod value;
pub use value::Value;

/// Sort a slice with insertion sort, returning a new sorted vector.
///
/// The input is left untouched. The sort is stable: elements that
/// compare equal keep their relative order. Incomparable pairs (for
/// instance a [`Value::Text`] against a number, or a float `NaN`) are
/// left in their original relative order.
///
/// ## Examples
///
/// ```
/// use lazygen::sort::insertion_sort;
///
/// let items = vec![5, 2, 9, 1, 7];
/// assert_eq!(insertion_sort(&items), vec![1, 2, 5, 7, 9]);
/// assert_eq!(items, vec![5, 2, 9, 1, 7]);
/// ```
pub fn insertion_sort<T: Clone + PartialOrd>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && sorted[j - 1] > sorted[j] {
            sorted.swap(j - 1, j);
            j -= 1;
        }
    }
    sorted
}

/// Check whether at least one element is a strictly positive number.
///
/// Text elements are skipped: only numeric values can witness the
/// predicate.
pub fn any_positive(values: &[Value]) -> bool {
    values.iter().any(|v| v.as_number().map_or(false, |x| x > 0.0))
}

/// Check whether every element is a number.
pub fn all_numbers(values: &[Value]) -> bool {
    values.iter().all(|v| v.is_number())
}
