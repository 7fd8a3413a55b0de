//! Pure slice algorithms, one module per problem kind.
//!
//! Each function works on caller-owned data and never allocates more than the problem needs. Preconditions are
//! documented per function; the harness validates them before calling in.

pub mod merge;
pub mod remove_element;
pub mod two_sum;

pub use merge::merge;
pub use remove_element::remove_element;
pub use two_sum::two_sum;
