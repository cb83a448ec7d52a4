pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod render;
pub mod ui;

pub use error::{ChangelogError, Result};
