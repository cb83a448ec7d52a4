use crate::error::{ChangelogError, Result};
use crate::git::{CommitInfo, History, Repository, TagRef};
use git2::Oid;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    commits: HashMap<Oid, MockCommit>,
    tags: Vec<TagRef>,
    annotated_tags: HashMap<Oid, Oid>,
    fail_walk_after: Option<usize>,
}

struct MockCommit {
    info: CommitInfo,
    parents: Vec<Oid>,
}

/// Build a commit whose id is derived from `seed`
pub fn mock_commit(seed: u8, message: &str, author: &str, timestamp: i64) -> CommitInfo {
    let id = mock_oid(seed);
    CommitInfo {
        id,
        hash: id.to_string(),
        message: message.to_string(),
        author: author.to_string(),
        timestamp,
    }
}

/// Deterministic object id for tests
pub fn mock_oid(seed: u8) -> Oid {
    let mut bytes = [seed; 20];
    bytes[0] = 0xa0;
    Oid::from_bytes(&bytes).unwrap_or_else(|_| Oid::zero())
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: Vec::new(),
            annotated_tags: HashMap::new(),
            fail_walk_after: None,
        }
    }

    /// Add a commit with the given parents
    pub fn add_commit(&mut self, info: CommitInfo, parents: &[Oid]) {
        self.commits.insert(
            info.id,
            MockCommit {
                info,
                parents: parents.to_vec(),
            },
        );
    }

    /// Build a linear history from oldest to newest and return the ids
    pub fn add_linear_history(&mut self, commits: Vec<CommitInfo>) -> Vec<Oid> {
        let mut ids = Vec::with_capacity(commits.len());
        for info in commits {
            let parents: Vec<Oid> = ids.last().copied().into_iter().collect();
            ids.push(info.id);
            self.add_commit(info, &parents);
        }
        ids
    }

    /// Add a lightweight tag pointing at a commit
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        self.tags.push(TagRef {
            name: name.into(),
            target,
        });
    }

    /// Add an annotated tag: the reference points at `tag_object`, which points at `commit`
    pub fn add_annotated_tag(&mut self, name: impl Into<String>, tag_object: Oid, commit: Oid) {
        self.annotated_tags.insert(tag_object, commit);
        self.add_tag(name, tag_object);
    }

    /// Make every history walk fail after yielding `count` commits
    pub fn fail_walk_after(&mut self, count: usize) {
        self.fail_walk_after = Some(count);
    }

    fn commit(&self, id: Oid) -> Option<&MockCommit> {
        self.commits.get(&id)
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn tag_refs(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn find_commit(&self, id: Oid) -> Result<CommitInfo> {
        self.commit(id)
            .map(|c| c.info.clone())
            .ok_or_else(|| git2::Error::from_str(&format!("object {} is not a commit", id)).into())
    }

    fn find_annotated_tag_commit(&self, id: Oid) -> Result<CommitInfo> {
        let target = self
            .annotated_tags
            .get(&id)
            .ok_or_else(|| git2::Error::from_str(&format!("object {} is not a tag", id)))?;
        self.find_commit(*target)
    }

    fn walk_history(&self, start: Oid) -> Result<History<'_>> {
        if self.commit(start).is_none() {
            return Err(ChangelogError::history_walk(format!(
                "cannot start walk at unknown commit {}",
                start
            )));
        }

        // Newest-first over the reachable graph: always emit the pending commit with the latest timestamp.
        let mut pending = vec![start];
        let mut seen: HashSet<Oid> = HashSet::from([start]);
        let mut ordered: Vec<Result<CommitInfo>> = Vec::new();
        while !pending.is_empty() {
            let newest = pending
                .iter()
                .enumerate()
                .max_by_key(|(_, id)| self.commits[*id].info.timestamp)
                .map(|(i, _)| i)
                .unwrap_or(0);
            let id = pending.swap_remove(newest);
            let commit = &self.commits[&id];
            for parent in &commit.parents {
                if self.commits.contains_key(parent) && seen.insert(*parent) {
                    pending.push(*parent);
                }
            }
            ordered.push(Ok(commit.info.clone()));
        }

        if let Some(limit) = self.fail_walk_after {
            ordered.truncate(limit);
            ordered.push(Err(ChangelogError::history_walk("simulated walk failure")));
        }

        Ok(Box::new(ordered.into_iter()))
    }
}
