use serde::Serialize;

use super::Command;
use crate::errors::Result;

/// Makes pending changes visible to searchers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_searcher: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expunge_deletes: Option<bool>,
}

impl Commit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the request blocks until a new searcher is opened.
    pub fn wait_searcher(mut self, wait: bool) -> Self {
        self.wait_searcher = Some(wait);
        self
    }

    /// Merges away segments that contain deleted documents.
    pub fn expunge_deletes(mut self, expunge: bool) -> Self {
        self.expunge_deletes = Some(expunge);
        self
    }
}

impl Command for Commit {
    fn name(&self) -> &'static str {
        "commit"
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Commits and merges the index down to fewer segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimize {
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_searcher: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_segments: Option<u32>,
}

impl Optimize {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wait_searcher(mut self, wait: bool) -> Self {
        self.wait_searcher = Some(wait);
        self
    }

    pub fn max_segments(mut self, segments: u32) -> Self {
        self.max_segments = Some(segments);
        self
    }
}

impl Command for Optimize {
    fn name(&self) -> &'static str {
        "optimize"
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_commit() {
        let commit = Commit::new();
        assert_eq!(commit.name(), "commit");
        assert_eq!(commit.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_commit_options() {
        let commit = Commit::new().wait_searcher(false).expunge_deletes(true);
        assert_eq!(
            commit.to_json().unwrap(),
            r#"{"waitSearcher":false,"expungeDeletes":true}"#
        );
    }

    #[test]
    fn test_optimize_options() {
        let optimize = Optimize::new();
        assert_eq!(optimize.name(), "optimize");
        assert_eq!(optimize.to_json().unwrap(), "{}");

        let optimize = optimize.max_segments(1).wait_searcher(true);
        assert_eq!(
            optimize.to_json().unwrap(),
            r#"{"waitSearcher":true,"maxSegments":1}"#
        );
    }
}
