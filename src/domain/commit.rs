use crate::conventional::{parse_conventional_commit, ConventionalMessage};
use crate::git::CommitInfo;

/// A commit classified by its conventional-commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub hash: String,
    pub short_hash: String,
    pub author: String,
    pub timestamp: i64,
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
    pub body: String,
    pub is_breaking_change: bool,
    pub breaking_message: Option<String>,
}

impl ParsedCommit {
    /// Classify a commit from its message; hash and author are carried through
    pub fn parse(commit: &CommitInfo) -> Self {
        let ConventionalMessage {
            r#type,
            scope,
            subject,
            body,
            is_breaking_change,
            breaking_message,
        } = parse_conventional_commit(&commit.message);

        ParsedCommit {
            hash: commit.hash.clone(),
            short_hash: commit.short_hash().to_string(),
            author: commit.author.clone(),
            timestamp: commit.timestamp,
            r#type,
            scope,
            subject,
            body,
            is_breaking_change,
            breaking_message,
        }
    }

    /// Text shown for the commit: the breaking footer when present, else the subject
    pub fn description(&self) -> &str {
        self.breaking_message.as_deref().unwrap_or(&self.subject)
    }
}
