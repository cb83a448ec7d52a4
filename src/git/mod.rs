//! Git access abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! operations the changelog needs, allowing for multiple implementations
//! including real Git repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Code that computes changelog content depends on the [Repository] trait
//! rather than concrete implementations.
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! for tag in repo.tag_refs()? {
//!     let commit = repo.find_commit(tag.target)?;
//!     println!("{} -> {}", tag.name, commit.short_hash());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Length of the abbreviated hash shown in changelog output
pub const SHORT_HASH_LEN: usize = 7;

/// Commit information read from the repository
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// Object id of the commit
    pub id: Oid,
    /// The full commit hash
    pub hash: String,
    /// The commit message, unmodified
    pub message: String,
    /// The commit author name
    pub author: String,
    /// Committer time in unix seconds
    pub timestamp: i64,
}

impl CommitInfo {
    /// Abbreviated hash used in rendered output
    pub fn short_hash(&self) -> &str {
        let end = self.hash.len().min(SHORT_HASH_LEN);
        &self.hash[..end]
    }
}

/// A tag reference as enumerated from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Short tag name (without `refs/tags/`)
    pub name: String,
    /// Object the reference points at: a commit or an annotated tag object
    pub target: Oid,
}

/// Sequence of commits produced by a history walk.
///
/// The walk holds repository resources until the iterator is dropped.
pub type History<'a> = Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>;

/// Read-only repository operations needed to build a changelog
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the matching
/// [crate::error::ChangelogError] variants.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation with an in-memory commit graph
pub trait Repository {
    /// List all tag references in enumeration order
    fn tag_refs(&self) -> Result<Vec<TagRef>>;

    /// Resolve an object id directly as a commit
    ///
    /// Fails when the id does not name a commit, e.g. when it is an
    /// annotated tag object.
    fn find_commit(&self, id: Oid) -> Result<CommitInfo>;

    /// Resolve an annotated tag object to the commit it points at
    fn find_annotated_tag_commit(&self, id: Oid) -> Result<CommitInfo>;

    /// Walk history from `start`, visiting ancestors newest first
    ///
    /// Each call starts a fresh walk. Dropping the returned iterator ends it.
    ///
    /// # Example
    /// ```rust
    /// # use git_changelog::git::Repository;
    /// # use git2::Oid;
    /// # fn example<R: Repository>(repo: &R, head: Oid) -> Result<(), Box<dyn std::error::Error>> {
    /// for commit in repo.walk_history(head)?.take(5) {
    ///     let commit = commit?;
    ///     println!("{} {}", commit.short_hash(), commit.message.lines().next().unwrap_or(""));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn walk_history(&self, start: Oid) -> Result<History<'_>>;
}
