//! # Keyed Outer-Join Merge
//!
//! The walk-and-match routine shared by every level of the decision tree.

/// Outer-join two ordered sequences by key, merging matched pairs.
///
/// Walks `left` in order. Each element is paired with the FIRST element of
/// `right` for which `same_key(left, right)` holds and replaced by
/// `merge_pair(left, right)`; elements with no partner are cloned unchanged.
/// The elements of `right` that no left element paired with are then
/// appended in their original order.
///
/// For inputs with unique keys on each side the output holds every key
/// exactly once. If one side repeats a key the output is still
/// deterministic: repeated left entries each pair with the same right entry,
/// and a repeated right entry after the first is appended as unmatched.
pub fn merge_keyed<T, S, M>(left: &[T], right: &[T], mut same_key: S, mut merge_pair: M) -> Vec<T>
where
    T: Clone,
    S: FnMut(&T, &T) -> bool,
    M: FnMut(&T, &T) -> T,
{
    let mut paired = vec![false; right.len()];
    let mut merged = Vec::with_capacity(left.len() + right.len());

    for l in left {
        match right.iter().position(|r| same_key(l, r)) {
            Some(i) => {
                paired[i] = true;
                merged.push(merge_pair(l, &right[i]));
            }
            None => merged.push(l.clone()),
        }
    }

    merged.extend(
        right
            .iter()
            .zip(&paired)
            .filter(|(_, paired)| !**paired)
            .map(|(r, _)| r.clone()),
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    type Entry = (&'static str, Vec<u32>);

    fn merge(left: &[Entry], right: &[Entry]) -> Vec<Entry> {
        merge_keyed(
            left,
            right,
            |l, r| l.0 == r.0,
            |l, r| (l.0, l.1.iter().chain(&r.1).copied().collect()),
        )
    }

    #[test]
    fn disjoint_keys_concatenate() {
        let merged = merge(&[("a", vec![1]), ("b", vec![2])], &[("c", vec![3])]);
        assert_eq!(merged, vec![("a", vec![1]), ("b", vec![2]), ("c", vec![3])]);
    }

    #[test]
    fn shared_key_merges_in_left_position() {
        let merged = merge(
            &[("a", vec![1]), ("b", vec![2])],
            &[("c", vec![3]), ("a", vec![4])],
        );
        assert_eq!(
            merged,
            vec![("a", vec![1, 4]), ("b", vec![2]), ("c", vec![3])]
        );
    }

    #[test]
    fn unmatched_right_entries_keep_right_order() {
        let merged = merge(
            &[("b", vec![1])],
            &[("z", vec![1]), ("b", vec![2]), ("a", vec![3])],
        );
        assert_eq!(
            merged,
            vec![("b", vec![1, 2]), ("z", vec![1]), ("a", vec![3])]
        );
    }

    #[test]
    fn empty_sides() {
        let entries = vec![("a", vec![1])];
        assert_eq!(merge(&[], &entries), entries);
        assert_eq!(merge(&entries, &[]), entries);
        assert!(merge(&[], &[]).is_empty());
    }

    #[test]
    fn repeated_right_key_pairs_only_first() {
        let merged = merge(&[("a", vec![1])], &[("a", vec![2]), ("a", vec![3])]);
        assert_eq!(merged, vec![("a", vec![1, 2]), ("a", vec![3])]);
    }

    #[test]
    fn repeated_left_key_pairs_each_with_same_right() {
        let merged = merge(&[("a", vec![1]), ("a", vec![2])], &[("a", vec![3])]);
        assert_eq!(merged, vec![("a", vec![1, 3]), ("a", vec![2, 3])]);
    }
}
