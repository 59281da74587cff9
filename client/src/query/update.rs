use serde_json::{Map, Value};

use super::command::{keyed_json, Add, Command, Commit, Delete, Optimize, UpdateCommand};
use super::{JsonQuery, SelectQuery};
use crate::errors::Result;

/// Body of a request to the `/update` endpoint: an ordered batch of
/// commands, optionally followed by a commit.
///
/// Solr's JSON update syntax allows repeated keys, so the batch is
/// written as one object such as
/// `{"delete":["33"],"add":{"doc":{"id":33}},"commit":{}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuery {
    commands: Vec<UpdateCommand>,
    commit: Option<Commit>,
}

impl UpdateQuery {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn add(self, document: Map<String, Value>) -> Self {
        self.command(Add::new(document))
    }

    /// Adds a prepared [`Add`], e.g. one carrying `commitWithin`.
    pub fn add_command(self, add: Add) -> Self {
        self.command(add)
    }

    pub fn delete_by_ids<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        self.command(Delete::from_ids(ids))
    }

    pub fn delete_by_query(self, query: SelectQuery) -> Self {
        self.command(Delete::from_query(query))
    }

    pub fn optimize(self, optimize: Optimize) -> Self {
        self.command(optimize)
    }

    pub fn command(mut self, command: impl Into<UpdateCommand>) -> Self {
        self.commands.push(command.into());
        self
    }

    /// Appends a plain commit after all other commands.
    pub fn commit(self) -> Self {
        self.commit_with(Commit::new())
    }

    pub fn commit_with(mut self, commit: Commit) -> Self {
        self.commit = Some(commit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.commit.is_none()
    }

    /// Command names in the order they are sent.
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .map(|c| c.name())
            .chain(self.commit.as_ref().map(|c| c.name()))
            .collect()
    }
}

impl JsonQuery for UpdateQuery {
    fn to_json(&self) -> Result<String> {
        let mut parts = Vec::with_capacity(self.commands.len() + 1);
        for command in &self.commands {
            parts.push(keyed_json(command)?);
        }
        if let Some(commit) = &self.commit {
            parts.push(keyed_json(commit)?);
        }
        Ok(format!("{{{}}}", parts.join(",")))
    }
}
