//! Validate zone specifications

use super::CliError;
use crate::{CompileError, Condition};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The zone specification to compile
    pub spec: String,
    /// Print the canonical compiled form instead of a confirmation
    pub show_ast: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Specification compiled
    Valid,
    /// Specification compiled; canonical form attached
    Compiled(String),
}

/// Compile a specification without defining a zone.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let condition = Condition::compile(&options.spec)?;

    if options.show_ast {
        Ok(CheckResult::Compiled(condition.to_string()))
    } else {
        Ok(CheckResult::Valid)
    }
}

/// Format a compile error with the offending line and a caret under the
/// column.
///
/// ```text
/// bind error at column 1: unknown predicate 'circel'
///   circel(0, 0, 10)
///   ^
/// ```
pub fn render_diagnostic(source: &str, error: &CompileError) -> String {
    // Columns count characters across the whole text, newlines included.
    let mut remaining = error.column().saturating_sub(1);
    let mut line_text = "";
    let mut caret = 0;
    for line in source.split('\n') {
        let width = line.chars().count();
        line_text = line;
        if remaining <= width {
            caret = remaining;
            break;
        }
        remaining -= width + 1;
        caret = width;
    }

    format!("{}\n  {}\n  {}^", error, line_text, " ".repeat(caret))
}
