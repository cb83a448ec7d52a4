use crate::git::CommitInfo;
use git2::Oid;

/// A tag resolved to the commit it marks
#[derive(Debug, Clone, PartialEq)]
pub struct TagDescriptor {
    /// Short tag name
    pub name: String,
    /// Object the tag reference points at (commit or annotated tag object)
    pub id: Oid,
    /// Committer time of the tagged commit, unix seconds
    pub timestamp: i64,
    pub commit: CommitInfo,
}

impl TagDescriptor {
    /// Create a descriptor; the timestamp is taken from the tagged commit
    pub fn new(name: impl Into<String>, id: Oid, commit: CommitInfo) -> Self {
        TagDescriptor {
            name: name.into(),
            id,
            timestamp: commit.timestamp,
            commit,
        }
    }

    /// Full hash of the tag reference target
    pub fn hash(&self) -> String {
        self.id.to_string()
    }

    /// Id of the tagged commit
    pub fn commit_id(&self) -> Oid {
        self.commit.id
    }
}
