//! Two-sum in one forward pass.

use std::collections::HashMap;

/// Find indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// Scans left to right; at each `j` it checks whether `target - nums[j]` was seen earlier. Values are recorded
/// only at their first occurrence, so the returned `i` is always the first index holding the complement.
///
/// ## Returns
/// - `Some((i, j))` for the smallest completing `j`.
/// - `None` if no pair sums to `target`.
///
/// ## Notes
/// - A complement that would overflow `i64` cannot appear in `nums`, so it is treated as absent.
///
/// ## Examples
/// ```rust
/// use leetrun_core::algorithms::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (j, &num) in nums.iter().enumerate() {
        if let Some(&i) = target.checked_sub(num).and_then(|complement| first_seen.get(&complement)) {
            return Some((i, j));
        }
        first_seen.entry(num).or_insert(j);
    }

    None
}
