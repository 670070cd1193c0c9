//! Candidate config file locations

use std::path::{Path, PathBuf};

/// Which rule put a path on the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Path named by `ANSIBLE_CONFIG`
    AnsibleConfigEnv,
    /// `ansible.cfg` in the project root
    Project,
    /// `~/.ansible.cfg`
    User,
    /// `/etc/ansible/ansible.cfg`
    System,
}

impl CandidateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateKind::AnsibleConfigEnv => "ANSIBLE_CONFIG",
            CandidateKind::Project => "project",
            CandidateKind::User => "user",
            CandidateKind::System => "system",
        }
    }
}

/// A config file that may hold vault settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn new(path: impl Into<PathBuf>, kind: CandidateKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Candidate config files, highest priority first
///
/// Built fresh for every resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePathList {
    candidates: Vec<Candidate>,
}

impl CandidatePathList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate at the lowest priority so far
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Insert a candidate ahead of everything already listed
    pub fn push_front(&mut self, candidate: Candidate) {
        self.candidates.insert(0, candidate);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.candidates.iter().map(|c| c.path.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a CandidatePathList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
