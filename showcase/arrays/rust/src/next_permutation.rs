//! Lexicographically next permutation, in place

/// Rearranges `data` into the next permutation in lexicographic order.
///
/// Returns `false` when `data` was already the last permutation (non-increasing);
/// it is then reset to the first one, ascending, the way the cycle wraps.
pub fn next_permutation(data: &mut [i32]) -> bool {
    // Rightmost position whose value is smaller than its successor
    let Some(pivot) = data.windows(2).rposition(|w| w[0] < w[1]) else {
        data.reverse();
        return false;
    };

    // The suffix after `pivot` is non-increasing, so the rightmost larger
    // value is the smallest one that still exceeds the pivot
    let pivot_value = data[pivot];
    if let Some(offset) = data[pivot + 1..].iter().rposition(|&v| v > pivot_value) {
        data.swap(pivot, pivot + 1 + offset);
    }
    data[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(data: &[i32]) -> (Vec<i32>, bool) {
        let mut v = data.to_vec();
        let advanced = next_permutation(&mut v);
        (v, advanced)
    }

    #[test]
    fn test_examples() {
        assert_eq!(next(&[1, 2, 3, 4, 5]), (vec![1, 2, 3, 5, 4], true));
        assert_eq!(next(&[1, 3, 2]), (vec![2, 1, 3], true));
        assert_eq!(next(&[2, 1, 5, 4, 3, 0, 0]), (vec![2, 3, 0, 0, 1, 4, 5], true));
        assert_eq!(next(&[1, 1, 5]), (vec![1, 5, 1], true));
    }

    #[test]
    fn test_last_permutation_wraps() {
        assert_eq!(next(&[3, 2, 1]), (vec![1, 2, 3], false));
        assert_eq!(next(&[5, 5, 1]), (vec![1, 5, 5], false));
        assert_eq!(next(&[7]), (vec![7], false));
        assert_eq!(next(&[]), (vec![], false));
    }

    #[test]
    fn test_walks_every_permutation_once() {
        let mut data = vec![1, 2, 3, 4];
        let mut seen = vec![data.clone()];
        while next_permutation(&mut data) {
            assert!(data > *seen.last().unwrap(), "not increasing: {:?}", data);
            seen.push(data.clone());
        }
        assert_eq!(seen.len(), 24);
        assert_eq!(data, [1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let mut data = vec![1, 1, 2, 2];
        let mut count = 1;
        while next_permutation(&mut data) {
            count += 1;
        }
        // 4! / (2! * 2!)
        assert_eq!(count, 6);
    }
}
