use crate::errors::Result;

pub mod command;
pub mod helper;
pub mod select;
pub mod update;

pub use command::{Add, Command, Commit, Delete, Optimize, UpdateCommand};
pub use helper::{Collapse, CollapseHint, Filter, NullPolicy, QueryHelper, Terms, TermsMethod};
pub use select::SelectQuery;
pub use update::UpdateQuery;

/// A value that can be sent as a request body.
pub trait JsonQuery {
    fn to_json(&self) -> Result<String>;
}
