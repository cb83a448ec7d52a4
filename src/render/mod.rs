//! Output renderers for changelog sections
//!
//! - [plain::PlainRenderer]: itemized lists
//! - [markdown::MarkdownRenderer]: markdown tables

pub mod markdown;
pub mod plain;

pub use markdown::MarkdownRenderer;
pub use plain::PlainRenderer;

use clap::ValueEnum;

use crate::changelog::TagSection;
use crate::config::Config;

/// Placeholder written for a tag boundary without commits
pub const NO_COMMITS_LINE: &str = "_No commits between these tags_";

/// Formats changelog sections into a document
pub trait Renderer {
    /// Render all sections, newest first.
    ///
    /// A section whose tag name equals `current` is marked as the current release.
    fn render(&self, sections: &[TagSection], current: Option<&str>) -> String;
}

/// Output formats selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Markdown tables
    #[default]
    Markdown,
    /// Itemized plain listing
    Plain,
}

impl OutputFormat {
    /// Build the renderer for this format
    pub fn renderer(self, config: &Config) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new(config)),
            OutputFormat::Plain => Box::new(PlainRenderer::new(config)),
        }
    }
}

/// Heading line for a tag section
pub fn tag_heading(tag_name: &str, current: Option<&str>) -> String {
    if current == Some(tag_name) {
        format!("## {} - Current Release", tag_name)
    } else {
        format!("## {}", tag_name)
    }
}

/// Heading line for the breaking-changes group
pub fn breaking_heading(title: &str) -> String {
    format!("### ⚠️  {}", title)
}

/// Escape text for use inside a markdown table cell.
///
/// `|` would end the cell early and newlines would end the row.
pub fn escape_table_cell(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '|' => escaped.push_str("\\|"),
            '\r' => {}
            '\n' => escaped.push(' '),
            other => escaped.push(other),
        }
    }
    escaped
}
