use crate::error::{ChangelogError, Result};
use crate::git::{CommitInfo, History, TagRef};
use git2::{Commit, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::{debug, instrument};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the git repository at exactly `path`; parent directories are not searched
    #[instrument]
    pub fn open<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path.as_ref()).map_err(|e| {
            ChangelogError::repository_open(format!("{}: {}", path.as_ref().display(), e.message()))
        })?;

        debug!(workdir = ?repo.workdir(), "opened repository");
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

fn commit_info(commit: &Commit<'_>) -> CommitInfo {
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
    let author = commit.author().name().unwrap_or("unknown").to_string();

    CommitInfo {
        id: commit.id(),
        hash: commit.id().to_string(),
        message,
        author,
        timestamp: commit.committer().when().seconds(),
    }
}

impl super::Repository for Git2Repository {
    fn tag_refs(&self) -> Result<Vec<TagRef>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name);
            tags.push(TagRef {
                name: name.trim_start_matches("refs/tags/").to_string(),
                target: oid,
            });
            true
        })?;

        debug!(count = tags.len(), "enumerated tag references");
        Ok(tags)
    }

    fn find_commit(&self, id: Oid) -> Result<CommitInfo> {
        let commit = self.repo.find_commit(id)?;
        Ok(commit_info(&commit))
    }

    fn find_annotated_tag_commit(&self, id: Oid) -> Result<CommitInfo> {
        let tag = self.repo.find_tag(id)?;
        let commit = tag.target()?.peel_to_commit()?;
        Ok(commit_info(&commit))
    }

    fn walk_history(&self, start: Oid) -> Result<History<'_>> {
        let walk_error = |e: git2::Error| ChangelogError::history_walk(e.message().to_string());

        let mut revwalk = self.repo.revwalk().map_err(walk_error)?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(walk_error)?;
        revwalk.push(start).map_err(walk_error)?;

        let repo = &self.repo;
        Ok(Box::new(revwalk.map(move |oid_result| -> Result<CommitInfo> {
            let oid = oid_result.map_err(walk_error)?;
            let commit = repo.find_commit(oid).map_err(walk_error)?;
            Ok(commit_info(&commit))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Repository;
    use tempfile::TempDir;

    #[test]
    fn test_open_non_repository_is_repository_open_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nothing-here");
        let result = Git2Repository::open(&missing);
        assert!(matches!(result, Err(ChangelogError::RepositoryOpen(_))));
    }

    #[test]
    fn test_empty_repository_has_no_tags() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let repo = Git2Repository::from_git2(repo);
        assert!(repo.tag_refs().unwrap().is_empty());
    }

    #[test]
    fn test_find_commit_unknown_oid_fails() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repository::from_git2(Git2Repo::init(dir.path()).unwrap());
        let oid = Oid::from_bytes(&[7; 20]).unwrap();
        assert!(repo.find_commit(oid).is_err());
        assert!(repo.find_annotated_tag_commit(oid).is_err());
    }
}
