//! Index-validated list operations.
//!
//! The point, path-element and shape sequences of the model are all plain
//! vectors; these helpers add the bounds discipline the editor relies on:
//! an out-of-range index fails without mutating the list.

/// Insert `value` at `index`.
///
/// Index 0 prepends and `index == list.len()` appends. Returns `false` and
/// leaves the list untouched when the index is past the end.
pub fn insert_at<T>(list: &mut Vec<T>, index: usize, value: T) -> bool {
    if index > list.len() {
        return false;
    }
    list.insert(index, value);
    true
}

/// Remove and return the element at `index`.
///
/// Returns `None` and leaves the list untouched when the index is out of
/// range.
pub fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Option<T> {
    if index >= list.len() {
        return None;
    }
    Some(list.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_prepend_and_append() {
        let mut list = vec![1, 3];
        assert!(insert_at(&mut list, 0, 0));
        assert!(insert_at(&mut list, 2, 2));
        assert!(insert_at(&mut list, 4, 4));
        assert_eq!(list, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_at_length_appends() {
        let mut list = vec![1, 2];
        let len = list.len();
        assert!(insert_at(&mut list, len, 3));
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_past_end_is_a_no_op() {
        let mut list = vec![1, 2];
        assert!(!insert_at(&mut list, 3, 9));
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = vec![1, 2, 3];
        assert_eq!(remove_at(&mut list, 1), Some(2));
        assert_eq!(list, vec![1, 3]);
    }

    #[test]
    fn test_remove_out_of_range_is_a_no_op() {
        let mut list = vec![1, 2];
        assert_eq!(remove_at(&mut list, 2), None);
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_remove_last_element_empties_list() {
        let mut list = vec![42];
        assert_eq!(remove_at(&mut list, 0), Some(42));
        assert!(list.is_empty());
    }
}
