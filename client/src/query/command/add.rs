use serde::Serialize;
use serde_json::{Map, Value};

use super::Command;
use crate::errors::{json_type_name, Result, SolrError};

/// Adds (or replaces) a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Add {
    doc: Map<String, Value>,
    #[serde(rename = "commitWithin", skip_serializing_if = "Option::is_none")]
    commit_within: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overwrite: Option<bool>,
}

impl Add {
    pub fn new(document: Map<String, Value>) -> Self {
        Self {
            doc: document,
            commit_within: None,
            overwrite: None,
        }
    }

    /// Builds the command from any value that serializes to a JSON object.
    pub fn create<T: Serialize + ?Sized>(document: &T) -> Result<Self> {
        match serde_json::to_value(document)? {
            Value::Object(doc) => Ok(Self::new(doc)),
            other => Err(SolrError::InvalidArgument(format!(
                "Add document must be an object, \"{}\" given.",
                json_type_name(&other)
            ))),
        }
    }

    /// Asks Solr to commit the document within the given number of milliseconds.
    pub fn commit_within(mut self, milliseconds: u64) -> Self {
        self.commit_within = Some(milliseconds);
        self
    }

    pub fn enable_overwrite(mut self) -> Self {
        self.overwrite = Some(true);
        self
    }

    pub fn disable_overwrite(mut self) -> Self {
        self.overwrite = Some(false);
        self
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.doc
    }
}

impl Command for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
