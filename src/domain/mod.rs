//! Domain types - parsed commits and resolved tags, independent of git access

pub mod commit;
pub mod tag;

pub use commit::ParsedCommit;
pub use tag::TagDescriptor;
