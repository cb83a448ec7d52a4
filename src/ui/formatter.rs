//! Pure formatting functions for console messages.

use crate::boundary::BoundaryWarning;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("\x1b[31mERROR:\x1b[0m {}", message)
}

/// Format a boundary warning with a yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}
