//! Tag loading: resolve every tag reference to its commit, newest first

use tracing::{debug, instrument};

use crate::domain::TagDescriptor;
use crate::error::{ChangelogError, Result};
use crate::git::{CommitInfo, Repository, TagRef};

/// Load all tags, resolved to commits and sorted by commit time, newest first.
///
/// Lightweight tags resolve directly; annotated tags are resolved through
/// their tag object. Any tag that resolves to neither aborts the whole load.
/// Tags with equal timestamps keep their enumeration order.
#[instrument(skip(repo))]
pub fn load_tags<R: Repository + ?Sized>(repo: &R) -> Result<Vec<TagDescriptor>> {
    let mut tags = repo
        .tag_refs()?
        .into_iter()
        .map(|tag_ref| -> Result<TagDescriptor> {
            let commit = resolve_tag_commit(repo, &tag_ref)?;
            Ok(TagDescriptor::new(tag_ref.name, tag_ref.target, commit))
        })
        .collect::<Result<Vec<_>>>()?;

    // sort_by is stable
    tags.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    debug!(count = tags.len(), "loaded tags");
    Ok(tags)
}

fn resolve_tag_commit<R: Repository + ?Sized>(repo: &R, tag_ref: &TagRef) -> Result<CommitInfo> {
    match repo.find_commit(tag_ref.target) {
        Ok(commit) => Ok(commit),
        Err(direct) => repo
            .find_annotated_tag_commit(tag_ref.target)
            .map_err(|annotated| {
                ChangelogError::tag_resolution(
                    &tag_ref.name,
                    format!("not a commit ({}) nor an annotated tag ({})", direct, annotated),
                )
            }),
    }
}
