//! In-place removal of every occurrence of a value.

/// Compact every element not equal to `val` to the front of `nums`.
///
/// A write cursor starts at 0 while a read cursor visits every index; each kept value is copied to the write
/// cursor's slot. Relative order of kept values is preserved.
///
/// ## Returns
/// - The number of kept values. `nums[..len]` is the retained prefix; values after it are unspecified.
///
/// ## Examples
/// ```rust
/// use leetrun_core::algorithms::remove_element;
///
/// let mut nums = vec![3, 2, 2, 3];
/// let len = remove_element(&mut nums, 3);
/// assert_eq!(&nums[..len], &[2, 2]);
/// ```
pub fn remove_element(nums: &mut [i64], val: i64) -> usize {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != val {
            nums[write] = nums[read];
            write += 1;
        }
    }
    write
}
