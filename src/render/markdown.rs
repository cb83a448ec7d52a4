//! Markdown table renderer

use std::fmt::Write;
use tracing::debug;

use super::{breaking_heading, escape_table_cell, tag_heading, Renderer, NO_COMMITS_LINE};
use crate::changelog::{GroupedOutput, TagSection};
use crate::config::{CommitGroups, Config};
use crate::domain::ParsedCommit;

/// Renders each group as a table of commit, scope, description and author
pub struct MarkdownRenderer {
    groups: CommitGroups,
    /// Include the author column
    pub show_author: bool,
}

impl MarkdownRenderer {
    pub fn new(config: &Config) -> Self {
        MarkdownRenderer {
            groups: config.commit_groups.clone(),
            show_author: config.show_author,
        }
    }

    fn write_table(&self, out: &mut String, heading: &str, entries: &[&ParsedCommit]) {
        let _ = writeln!(out, "{}\n", heading);
        if self.show_author {
            out.push_str("| Commit | Scope | Description | Author |\n");
            out.push_str("|--------|-------|-------------|--------|\n");
        } else {
            out.push_str("| Commit | Scope | Description |\n");
            out.push_str("|--------|-------|-------------|\n");
        }

        for commit in entries {
            let scope = commit
                .scope
                .as_deref()
                .map(escape_table_cell)
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(
                out,
                "| `{}` | {} | {} |",
                commit.short_hash,
                scope,
                escape_table_cell(commit.description())
            );
            if self.show_author {
                let _ = write!(out, " {} |", escape_table_cell(&commit.author));
            }
            out.push('\n');
        }
        out.push('\n');
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, sections: &[TagSection], current: Option<&str>) -> String {
        let mut out = String::new();

        for section in sections {
            let _ = writeln!(out, "{}\n", tag_heading(&section.tag_name, current));

            if section.is_empty() {
                let _ = writeln!(out, "{}\n", NO_COMMITS_LINE);
                continue;
            }

            let grouped = GroupedOutput::from_entries(&section.entries, &self.groups);
            if !grouped.breaking.is_empty() {
                self.write_table(
                    &mut out,
                    &breaking_heading(&grouped.breaking_title),
                    &grouped.breaking,
                );
            }
            for group in &grouped.groups {
                self.write_table(&mut out, &format!("### {}", group.title), &group.entries);
            }
        }

        debug!(output_len = out.len(), "markdown changelog rendered");
        out
    }
}
