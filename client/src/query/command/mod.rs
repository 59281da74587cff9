use crate::errors::Result;

pub mod add;
pub mod delete;
pub mod maintenance;

pub use add::Add;
pub use delete::Delete;
pub use maintenance::{Commit, Optimize};

/// One operation understood by Solr's `/update` handler.
pub trait Command {
    /// Key under which the command appears in an update body, e.g. `add`.
    fn name(&self) -> &'static str;

    fn to_json(&self) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateCommand {
    Add(Add),
    Delete(Delete),
    Commit(Commit),
    Optimize(Optimize),
}

impl Command for UpdateCommand {
    fn name(&self) -> &'static str {
        match self {
            UpdateCommand::Add(c) => c.name(),
            UpdateCommand::Delete(c) => c.name(),
            UpdateCommand::Commit(c) => c.name(),
            UpdateCommand::Optimize(c) => c.name(),
        }
    }

    fn to_json(&self) -> Result<String> {
        match self {
            UpdateCommand::Add(c) => c.to_json(),
            UpdateCommand::Delete(c) => c.to_json(),
            UpdateCommand::Commit(c) => c.to_json(),
            UpdateCommand::Optimize(c) => c.to_json(),
        }
    }
}

impl From<Add> for UpdateCommand {
    fn from(command: Add) -> Self {
        UpdateCommand::Add(command)
    }
}

impl From<Delete> for UpdateCommand {
    fn from(command: Delete) -> Self {
        UpdateCommand::Delete(command)
    }
}

impl From<Commit> for UpdateCommand {
    fn from(command: Commit) -> Self {
        UpdateCommand::Commit(command)
    }
}

impl From<Optimize> for UpdateCommand {
    fn from(command: Optimize) -> Self {
        UpdateCommand::Optimize(command)
    }
}

/// `"<name>":<body>`, one entry of an update object.
pub(crate) fn keyed_json(command: &impl Command) -> Result<String> {
    Ok(format!(
        "{}:{}",
        serde_json::to_string(command.name())?,
        command.to_json()?
    ))
}

/// Wraps a command as a standalone update body: `{"<name>":<body>}`.
pub(crate) fn to_update_body(command: &impl Command) -> Result<String> {
    Ok(format!("{{{}}}", keyed_json(command)?))
}
