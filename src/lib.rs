#![forbid(unsafe_code)]
//! leetrun: run problem solvers against input/output fixture files
//!
//! A fixture is a text file with an `Input:` line and an `Output:` line. The harness finds fixtures under
//! `<root>/<problem-kind>/`, parses each into a typed [`fixture::TestCase`], solves it with the kind's
//! [`registry::Solver`] and reports whether the result matches.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a harness bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fixture;
pub mod problem;
pub mod registry;
pub mod version;

pub use config::{ArrayParseMode, RunConfig};
pub use errors::{HarnessError, HarnessResult};
pub use fixture::{TestCase, parse_fixture};
pub use problem::{Expected, ProblemInput, ProblemKind, SolveOutput};
pub use registry::{Registry, Solver, solver_for};
