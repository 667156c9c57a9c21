/// Remove one or more items from a list.
///
/// Every element of `alist` equal to some element of `elements` is dropped;
/// the rest are returned in their original order. Neither input is touched.
///
/// ```
/// use alpha_utils::remove_list_items;
///
/// let kept = remove_list_items(&["b"], &["a", "b", "c", "b"]);
/// assert_eq!(kept, vec!["a", "c"]);
/// ```
pub fn remove_list_items<T: PartialEq + Clone>(elements: &[T], alist: &[T]) -> Vec<T> {
    alist
        .iter()
        .filter(|item| !elements.contains(item))
        .cloned()
        .collect()
}
