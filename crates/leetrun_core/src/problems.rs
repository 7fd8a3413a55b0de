//! Built-in problem vocabulary.
//!
//! This module defines the canonical set of problem kinds the harness knows how to solve. Callers should use the
//! stable identifier [`ProblemId`] for identity and query spellings, parameters and other metadata through
//! [`ProblemInfo`] / [`PROBLEMS`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - A problem's canonical spelling doubles as the name of its fixture directory.
//! - Aliases exist so fixture trees using older directory names keep resolving.
//!
//! ## Examples
//! ```rust
//! use leetrun_core::problems::{self, ProblemId};
//!
//! assert_eq!(problems::from_str("two_sum"), Some(ProblemId::TwoSum));
//! assert_eq!(problems::from_str("merge_sorted_array"), Some(ProblemId::MergeArray));
//! assert_eq!(problems::as_str(ProblemId::RemoveElement), "remove_element");
//! ```

/// Stable identifier for a built-in problem kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProblemId {
    MergeArray,
    TwoSum,
    RemoveElement,
}

/// Shape of a named input parameter on a fixture's `Input:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamShape {
    /// `name=[v1,v2,...]`
    IntArray,
    /// `name=<integer>`
    Int,
}

/// A named input parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: &'static str,
    pub shape: ParamShape,
}

/// Shape of a fixture's `Output:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// A bracketed integer array.
    IntArray,
    /// A leading length, optionally followed by the bracketed retained prefix.
    LengthWithPrefix,
}

/// Metadata for a built-in problem kind.
///
/// ## Notes
/// - `params` lists every field the fixture parser must find on the `Input:` line, in fixture order.
/// - `output` selects how the `Output:` line is read.
/// - This type is `Copy` so the registry can live in a `const` table.
#[derive(Debug, Clone, Copy)]
pub struct ProblemInfo {
    pub id: ProblemId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub params: &'static [ParamInfo],
    pub output: OutputShape,
}

const fn array(name: &'static str) -> ParamInfo {
    ParamInfo {
        name,
        shape: ParamShape::IntArray,
    }
}

const fn int(name: &'static str) -> ParamInfo {
    ParamInfo {
        name,
        shape: ParamShape::Int,
    }
}

/// Registry of all built-in problem kinds.
pub const PROBLEMS: &[ProblemInfo] = &[
    info(
        ProblemId::MergeArray,
        "merge_array",
        &["merge_sorted_array"],
        "Merge two sorted integer runs into one sorted run of length m + n.",
        &[array("nums1"), int("m"), array("nums2"), int("n")],
        OutputShape::IntArray,
    ),
    info(
        ProblemId::TwoSum,
        "two_sum",
        &[],
        "Return the indices of the first pair of values summing to target.",
        &[array("nums"), int("target")],
        OutputShape::IntArray,
    ),
    info(
        ProblemId::RemoveElement,
        "remove_element",
        &[],
        "Compact out every occurrence of val and report the retained length and prefix.",
        &[array("nums"), int("val")],
        OutputShape::LengthWithPrefix,
    ),
];

/// Return the canonical spelling for a problem kind.
///
/// ## Examples
/// ```rust
/// use leetrun_core::problems::{self, ProblemId};
///
/// assert_eq!(problems::as_str(ProblemId::MergeArray), "merge_array");
/// ```
pub fn as_str(id: ProblemId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a problem kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ProblemId) -> &'static ProblemInfo {
    PROBLEMS
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every ProblemId has a PROBLEMS entry")
}

/// Resolve a spelling to a problem identifier.
///
/// ## Returns
/// - `Some(ProblemId)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<ProblemId> {
    if let Some(p) = PROBLEMS.iter().find(|p| p.canonical == name) {
        return Some(p.id);
    }
    PROBLEMS
        .iter()
        .find(|p| {
            let aliases: &[&str] = p.aliases;
            aliases.contains(&name)
        })
        .map(|p| p.id)
}

const fn info(
    id: ProblemId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    params: &'static [ParamInfo],
    output: OutputShape,
) -> ProblemInfo {
    ProblemInfo {
        id,
        canonical,
        aliases,
        description,
        params,
        output,
    }
}
