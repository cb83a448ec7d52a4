//! User interface module - console messages around the generated document.
//!
//! The changelog itself goes to stdout; everything here writes to stderr.

pub mod formatter;

pub use formatter::{display_boundary_warning, display_error};
