//! Commit ranges between tag boundaries

use git2::Oid;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::git::{CommitInfo, Repository};

/// Commits of one tag range, newest first
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRange {
    pub commits: Vec<CommitInfo>,
    /// False when a lower boundary was requested but never met during the walk
    pub boundary_reached: bool,
}

/// Collect the commits from `to` (inclusive) back to `from` (exclusive).
///
/// Without `from`, the whole ancestry of `to` is returned. When `from` is not
/// an ancestor of `to`, every visited commit is returned and
/// `boundary_reached` is false; no error is raised for that case.
///
/// Any failure while walking is returned as-is with no partial result.
#[instrument(skip(repo))]
pub fn commits_between<R: Repository + ?Sized>(
    repo: &R,
    from: Option<Oid>,
    to: Oid,
) -> Result<CommitRange> {
    let history = repo.walk_history(to)?;

    let mut commits = Vec::new();
    let mut boundary_reached = from.is_none();
    for commit in history {
        let commit = commit?;
        if Some(commit.id) == from {
            boundary_reached = true;
            break;
        }
        commits.push(commit);
    }

    if !boundary_reached {
        warn!(
            visited = commits.len(),
            "lower boundary commit not reached; range includes all ancestors"
        );
    }

    debug!(count = commits.len(), "collected commit range");
    Ok(CommitRange {
        commits,
        boundary_reached,
    })
}
