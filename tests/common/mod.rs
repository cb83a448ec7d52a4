#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature, Time};
use std::path::Path;
use tempfile::TempDir;

/// A scratch repository that is removed when dropped
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self, author: &str, time: i64) -> Signature<'static> {
        Signature::new(author, "dev@example.com", &Time::new(time, 0)).expect("signature")
    }

    /// Commit an empty tree on HEAD with the given message and time
    pub fn commit(&self, message: &str, author: &str, time: i64) -> Oid {
        let sig = self.signature(author, time);
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents: Vec<Commit<'_>> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&Commit<'_>> = parents.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .expect("commit")
    }

    pub fn tag_lightweight(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn tag_annotated(&self, name: &str, target: Oid, time: i64) -> Oid {
        let object = self.repo.find_object(target, None).unwrap();
        let sig = self.signature("Release Bot", time);
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .unwrap()
    }

    /// Write a YAML config next to the repository and return its path
    pub fn write_config(&self, body: &str) -> String {
        let path = self.dir.path().join("changelog-config.yml");
        let contents = format!("git_path: {}\n{}", self.path().display(), body);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }
}

/// A repository with two releases:
///
/// - v0.1.0 (lightweight): "chore: initial commit", "feat: add parser"
/// - v0.2.0 (annotated): "fix(api)!: break y", "feat: add x", "chore: cleanup"
pub fn two_release_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.commit("chore: initial commit", "Ann", 1_000);
    let v1 = repo.commit("feat: add parser", "Ann", 2_000);
    repo.tag_lightweight("v0.1.0", v1);

    repo.commit("chore: cleanup", "Bo", 3_000);
    repo.commit("feat: add x", "Bo", 4_000);
    let v2 = repo.commit("fix(api)!: break y | z", "Cy", 5_000);
    repo.tag_annotated("v0.2.0", v2, 5_500);
    repo
}
