use serde_json::Value;

use super::Command;
use crate::errors::Result;
use crate::query::{JsonQuery, SelectQuery};

#[derive(Debug, Clone, PartialEq)]
enum Target {
    Ids(Vec<Value>),
    Query(SelectQuery),
}

/// Deletes documents either by unique key or by query.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    target: Target,
}

impl Delete {
    /// Ids keep their JSON type, so numeric keys are sent as numbers.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        Self {
            target: Target::Ids(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Only the query part is meaningful to Solr's delete-by-query.
    pub fn from_query(query: SelectQuery) -> Self {
        Self {
            target: Target::Query(query),
        }
    }
}

impl Command for Delete {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn to_json(&self) -> Result<String> {
        match &self.target {
            Target::Ids(ids) => Ok(serde_json::to_string(ids)?),
            Target::Query(query) => query.to_json(),
        }
    }
}
