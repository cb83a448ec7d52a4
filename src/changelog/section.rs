//! Per-tag sections and grouping of their commits by type

use std::collections::HashMap;
use tracing::debug;

use crate::config::{CommitGroups, BREAKING_KEY, OTHER_KEY};
use crate::conventional::should_ignore_commit;
use crate::domain::ParsedCommit;
use crate::git::CommitInfo;

/// Commits of one tag boundary after filtering and parsing
#[derive(Debug, Clone, PartialEq)]
pub struct TagSection {
    pub tag_name: String,
    pub entries: Vec<ParsedCommit>,
}

impl TagSection {
    /// Drop ignored commits and parse the rest, keeping walk order
    pub fn from_commits(tag_name: impl Into<String>, commits: &[CommitInfo], ignore: &str) -> Self {
        let entries: Vec<ParsedCommit> = commits
            .iter()
            .filter(|commit| !should_ignore_commit(&commit.message, ignore))
            .map(ParsedCommit::parse)
            .collect();

        let tag_name = tag_name.into();
        debug!(
            tag = %tag_name,
            total = commits.len(),
            kept = entries.len(),
            "built tag section"
        );
        TagSection { tag_name, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Commits of one type, rendered under a single heading
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    pub key: String,
    pub title: String,
    pub entries: Vec<&'a ParsedCommit>,
}

/// A section's commits split into breaking changes and ordered type groups
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedOutput<'a> {
    pub breaking_title: String,
    pub breaking: Vec<&'a ParsedCommit>,
    pub groups: Vec<Group<'a>>,
}

impl<'a> GroupedOutput<'a> {
    /// Group entries by type.
    ///
    /// Breaking commits go only to the breaking list. Groups follow the
    /// declared order of `title_maps`, with `other` appended last unless it
    /// was declared. Types that are neither declared nor `other` are dropped,
    /// or folded into `other` when `fold_unconfigured` is set.
    pub fn from_entries(entries: &'a [ParsedCommit], config: &CommitGroups) -> Self {
        let mut breaking = Vec::new();
        let mut buckets: HashMap<&str, Vec<&'a ParsedCommit>> = HashMap::new();

        for entry in entries {
            if entry.is_breaking_change {
                breaking.push(entry);
                continue;
            }

            let key = entry.r#type.as_str();
            let key = if config.fold_unconfigured && key != OTHER_KEY && !config.is_configured(key) {
                OTHER_KEY
            } else {
                key
            };
            buckets.entry(key).or_default().push(entry);
        }

        let mut groups = Vec::new();
        let declared = config
            .title_maps
            .keys()
            .map(String::as_str)
            .filter(|key| *key != BREAKING_KEY);
        for key in declared {
            if let Some(group_entries) = buckets.remove(key) {
                groups.push(Group {
                    key: key.to_string(),
                    title: config.group_title(key),
                    entries: group_entries,
                });
            }
        }

        if let Some(other) = buckets.remove(OTHER_KEY) {
            groups.push(Group {
                key: OTHER_KEY.to_string(),
                title: config.group_title(OTHER_KEY),
                entries: other,
            });
        }

        if !buckets.is_empty() {
            debug!(
                types = ?buckets.keys().collect::<Vec<_>>(),
                "dropping commits with unconfigured types"
            );
        }

        GroupedOutput {
            breaking_title: config.breaking_title(),
            breaking,
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::mock_commit;

    fn groups(pairs: &[(&str, &str)]) -> CommitGroups {
        let mut groups = CommitGroups::default();
        for (key, title) in pairs {
            groups
                .title_maps
                .insert(key.to_string(), title.to_string());
        }
        groups
    }

    fn section(messages: &[&str], ignore: &str) -> TagSection {
        let commits: Vec<CommitInfo> = messages
            .iter()
            .enumerate()
            .map(|(i, m)| mock_commit(i as u8 + 1, m, "Ann", 1000 - i as i64))
            .collect();
        TagSection::from_commits("v1.0.0", &commits, ignore)
    }

    fn keys(output: &GroupedOutput<'_>) -> Vec<String> {
        output.groups.iter().map(|g| g.key.clone()).collect()
    }

    #[test]
    fn test_ignored_commits_are_filtered() {
        let section = section(&["feat: keep", "chore: release [skip]", "fix: keep too"], "[skip]");
        let subjects: Vec<&str> = section.entries.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["keep", "keep too"]);
    }

    #[test]
    fn test_ignored_breaking_commit_is_not_listed() {
        let section = section(&["feat!: gone [skip]", "feat: stays"], "[skip]");
        let config = groups(&[("feat", "Features")]);
        let output = GroupedOutput::from_entries(&section.entries, &config);
        assert!(output.breaking.is_empty());
        assert_eq!(output.groups[0].entries.len(), 1);
    }

    #[test]
    fn test_empty_ignore_keeps_everything() {
        let section = section(&["feat: a", "fix: b"], "");
        assert_eq!(section.entries.len(), 2);
    }

    #[test]
    fn test_groups_follow_declared_order() {
        let section = section(&["feat: a", "fix: b", "docs: c", "feat: d"], "");
        let config = groups(&[("fix", "Bug Fixes"), ("docs", "Docs"), ("feat", "Features")]);
        let output = GroupedOutput::from_entries(&section.entries, &config);
        assert_eq!(keys(&output), vec!["fix", "docs", "feat"]);

        let feat: Vec<&str> = output.groups[2]
            .entries
            .iter()
            .map(|e| e.subject.as_str())
            .collect();
        assert_eq!(feat, vec!["a", "d"]);
    }

    #[test]
    fn test_mixed_scenario_breaking_features_and_dropped_chore() {
        let section = section(&["feat: add x", "fix(api)!: break y", "chore: cleanup"], "");
        let config = groups(&[("feat", "Features"), ("fix", "Bug Fixes")]);
        let output = GroupedOutput::from_entries(&section.entries, &config);

        assert_eq!(output.breaking_title, "Breaking Changes");
        assert_eq!(output.breaking.len(), 1);
        assert_eq!(output.breaking[0].subject, "break y");
        assert_eq!(keys(&output), vec!["feat"]);
        assert_eq!(output.groups[0].title, "Features");
    }

    #[test]
    fn test_fold_unconfigured_into_other() {
        let section = section(&["feat: add x", "chore: cleanup", "Random message"], "");
        let mut config = groups(&[("feat", "Features")]);
        config.fold_unconfigured = true;
        let output = GroupedOutput::from_entries(&section.entries, &config);

        assert_eq!(keys(&output), vec!["feat", "other"]);
        assert_eq!(output.groups[1].title, "Other");
        assert_eq!(output.groups[1].entries.len(), 2);
    }

    #[test]
    fn test_other_appended_last_when_not_declared() {
        let section = section(&["Merge pull request #1", "feat: a"], "");
        let config = groups(&[("feat", "Features")]);
        let output = GroupedOutput::from_entries(&section.entries, &config);
        assert_eq!(keys(&output), vec!["feat", "other"]);
    }

    #[test]
    fn test_declared_other_keeps_position_and_title() {
        let section = section(&["Merge pull request #1", "feat: a"], "");
        let config = groups(&[("other", "Misc"), ("feat", "Features")]);
        let output = GroupedOutput::from_entries(&section.entries, &config);
        assert_eq!(keys(&output), vec!["other", "feat"]);
        assert_eq!(output.groups[0].title, "Misc");
    }

    #[test]
    fn test_breaking_title_from_config() {
        let section = section(&["feat!: a"], "");
        let config = groups(&[("breaking", "Heads Up"), ("feat", "Features")]);
        let output = GroupedOutput::from_entries(&section.entries, &config);
        assert_eq!(output.breaking_title, "Heads Up");
        assert!(output.groups.is_empty());
    }
}
