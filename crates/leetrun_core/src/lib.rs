//! Provide the canonical problem vocabulary and the pure algorithms behind every built-in solver.
//!
//! This crate is intentionally small and dependency-free. It contains the pieces that both the fixture parser
//! and the solvers agree on:
//! - which problem kinds exist, how they are spelled and which named parameters they take, and
//! - the slice algorithms that compute each kind's answer.
//!
//! ## Notes
//!
//! - **No IO**, no global state and no harness types. Fixture reading, dispatch and reporting live in the
//!   `leetrun` crate.
//! - Algorithms operate in place on caller-owned slices; callers decide whether to copy first.

pub mod algorithms;
pub mod problems;
