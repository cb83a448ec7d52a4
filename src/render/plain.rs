//! Plain itemized renderer

use std::fmt::Write;

use super::{breaking_heading, tag_heading, Renderer, NO_COMMITS_LINE};
use crate::changelog::{GroupedOutput, TagSection};
use crate::config::{CommitGroups, Config};
use crate::domain::ParsedCommit;

/// Renders each group as a bullet list: hash, optional bold scope, description
pub struct PlainRenderer {
    groups: CommitGroups,
}

impl PlainRenderer {
    pub fn new(config: &Config) -> Self {
        PlainRenderer {
            groups: config.commit_groups.clone(),
        }
    }
}

fn write_items(out: &mut String, heading: &str, entries: &[&ParsedCommit]) {
    let _ = writeln!(out, "{}\n", heading);
    for commit in entries {
        match &commit.scope {
            Some(scope) => {
                let _ = writeln!(
                    out,
                    "- {} **{}:** {}",
                    commit.short_hash,
                    scope,
                    commit.description()
                );
            }
            None => {
                let _ = writeln!(out, "- {} {}", commit.short_hash, commit.description());
            }
        }
    }
    out.push('\n');
}

impl Renderer for PlainRenderer {
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
                write_items(
                    &mut out,
                    &breaking_heading(&grouped.breaking_title),
                    &grouped.breaking,
                );
            }
            for group in &grouped.groups {
                write_items(&mut out, &format!("### {}", group.title), &group.entries);
            }
        }

        out
    }
}
