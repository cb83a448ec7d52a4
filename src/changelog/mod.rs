//! Changelog assembly: tags, commit ranges and per-tag sections
//!
//! Data flows tag loading → range walk per consecutive tag pair (and the
//! oldest tag back to the root) → parsing and filtering → grouping.

pub mod history;
pub mod section;
pub mod tags;

pub use history::{commits_between, CommitRange};
pub use section::{Group, GroupedOutput, TagSection};
pub use tags::load_tags;

use tracing::{info, instrument};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::TagDescriptor;
use crate::error::Result;
use crate::git::Repository;

/// Sections of a changelog, newest tag first, plus non-fatal warnings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Changelog {
    pub sections: Vec<TagSection>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Build one section per tag from already loaded, newest-first tags.
///
/// Each tag covers the commits after the next older tag; the oldest tag
/// covers its whole ancestry.
#[instrument(skip_all, fields(tags = tags.len()))]
pub fn build_sections<R: Repository + ?Sized>(
    repo: &R,
    tags: &[TagDescriptor],
    config: &Config,
) -> Result<Changelog> {
    let mut changelog = Changelog::default();

    for (index, tag) in tags.iter().enumerate() {
        let previous = tags.get(index + 1);
        let range = commits_between(repo, previous.map(TagDescriptor::commit_id), tag.commit_id())?;

        if let Some(previous) = previous.filter(|_| !range.boundary_reached) {
            changelog.warnings.push(BoundaryWarning::LowerBoundaryNotReached {
                tag: tag.name.clone(),
                previous_tag: previous.name.clone(),
            });
        }

        changelog
            .sections
            .push(TagSection::from_commits(&tag.name, &range.commits, &config.ignore));
    }

    info!(sections = changelog.sections.len(), "changelog sections built");
    Ok(changelog)
}

/// Load tags and build all sections in one step
pub fn generate<R: Repository + ?Sized>(repo: &R, config: &Config) -> Result<Changelog> {
    let tags = load_tags(repo)?;
    let mut changelog = build_sections(repo, &tags, config)?;
    if tags.is_empty() {
        changelog.warnings.push(BoundaryWarning::NoTags {
            repository: config.git_path.clone(),
        });
    }
    Ok(changelog)
}
