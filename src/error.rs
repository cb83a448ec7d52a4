use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot open repository: {0}")]
    RepositoryOpen(String),

    #[error("Cannot resolve tag '{tag}': {reason}")]
    TagResolution { tag: String, reason: String },

    #[error("History walk failed: {0}")]
    HistoryWalk(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a repository-open error with context
    pub fn repository_open(msg: impl Into<String>) -> Self {
        ChangelogError::RepositoryOpen(msg.into())
    }

    /// Create a tag resolution error for the named tag
    pub fn tag_resolution(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ChangelogError::TagResolution {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a history walk error with context
    pub fn history_walk(msg: impl Into<String>) -> Self {
        ChangelogError::HistoryWalk(msg.into())
    }
}
