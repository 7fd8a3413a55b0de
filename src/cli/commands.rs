//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use leetrun_core::problems;

use super::{CliResult, ExitCode};
use crate::registry::Registry;

/// Print the registered problem kinds, one per line.
pub fn list_problems(registry: &Registry) -> CliResult<ExitCode> {
    println!("{}", render_problem_list(registry));
    Ok(ExitCode::SUCCESS)
}

/// One line per registered kind: name, then the built-in description when the name is known.
///
/// Aliases are listed under their own name and point at their canonical kind.
pub fn render_problem_list(registry: &Registry) -> String {
    let kinds = registry.kinds();
    let width = kinds.iter().map(|k| k.as_str().len()).max().unwrap_or(0);

    kinds
        .into_iter()
        .map(|kind| {
            let Some(info) = problems::from_str(kind.as_str()).map(problems::info_for) else {
                return kind.to_string();
            };
            if info.canonical == kind.as_str() {
                format!("{:<width$}  {}", kind.as_str(), info.description)
            } else {
                format!("{:<width$}  alias of {}", kind.as_str(), info.canonical)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
