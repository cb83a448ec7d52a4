use std::fmt;

/// Warnings that occur when walking tag boundaries.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no tags, so there is nothing to render
    NoTags { repository: String },
    /// The previous tag is not an ancestor of this tag; the section lists its full history
    LowerBoundaryNotReached { tag: String, previous_tag: String },
    /// The `--current` tag does not name any loaded tag
    CurrentTagNotFound { current: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTags { repository } => {
                write!(f, "No tags found in repository '{}'", repository)
            }
            BoundaryWarning::LowerBoundaryNotReached { tag, previous_tag } => {
                write!(
                    f,
                    "Tag '{}' is not an ancestor of '{}'; section '{}' lists its entire history",
                    previous_tag, tag, tag
                )
            }
            BoundaryWarning::CurrentTagNotFound { current } => {
                write!(f, "Current release tag '{}' does not exist", current)
            }
        }
    }
}
