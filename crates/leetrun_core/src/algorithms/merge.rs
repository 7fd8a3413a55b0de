//! Merge of two sorted runs, filled from the back.

/// Merge the first `n` entries of `nums2` into `nums1`, whose first `m` entries are meaningful.
///
/// Both prefixes must already be sorted in non-decreasing order. Entries of `nums1` past `m` are scratch space.
/// The merged run ends up in `nums1[..m + n]`; anything after that is left untouched.
///
/// ## Notes
/// - Three cursors walk backwards: the last unread entry of each run and the next slot to write. The larger of
///   the two unread entries goes into the slot. Once `nums2` is drained, the rest of `nums1` is already in place.
/// - Equal values from `nums2` land after those from `nums1`, so no value is lost or duplicated.
///
/// ## Panics
/// - If `nums1.len() < m + n` or `nums2.len() < n`.
///
/// ## Examples
/// ```rust
/// use leetrun_core::algorithms::merge;
///
/// let mut nums1 = vec![1, 2, 3, 0, 0, 0];
/// merge(&mut nums1, 3, &[2, 5, 6], 3);
/// assert_eq!(nums1, vec![1, 2, 2, 3, 5, 6]);
/// ```
pub fn merge(nums1: &mut [i64], m: usize, nums2: &[i64], n: usize) {
    assert!(nums1.len() >= m + n, "nums1 has no room for {} merged values", m + n);
    assert!(nums2.len() >= n, "nums2 holds fewer than {} values", n);

    let mut left = m;
    let mut right = n;
    let mut write = m + n;

    while right > 0 {
        if left > 0 && nums1[left - 1] > nums2[right - 1] {
            nums1[write - 1] = nums1[left - 1];
            left -= 1;
        } else {
            nums1[write - 1] = nums2[right - 1];
            right -= 1;
        }
        write -= 1;
    }
}
