//! Interval lookup on sorted genetic-map positions.

/// Locate the map interval containing `value`.
///
/// Returns the index `i` such that `x[i] <= value < x[i + 1]`, searching
/// only within `x[left..]`. Ties are resolved toward the rightmost position
/// equal to `value`, so loci sharing one map position always fall on the
/// same side of a breakpoint.
///
/// Edge cases:
/// - `value < x[left]` (or `x` empty, or `left` out of bounds) returns `None`.
/// - `value >= x[last]` returns the last index.
///
/// Crossovers are resolved in increasing order, so callers pass the previous
/// result as `left` to shrink each successive search.
pub fn interval_search(x: &[f64], value: f64, left: usize) -> Option<usize> {
    if *x.get(left)? > value {
        return None;
    }
    let end = x.len() - 1;
    if x[end] <= value {
        return Some(end);
    }

    let mut left = left;
    let mut right = end;
    while right - left > 1 {
        let middle = (left + right) / 2;
        if x[middle] == value {
            left = middle;
            while left < end && x[left + 1] == value {
                left += 1;
            }
            break;
        } else if x[middle] > value {
            right = middle;
        } else {
            left = middle;
        }
    }
    Some(left)
}
