use std::fmt::Write as _;

use super::{local_param_value, validate_field_name, QueryHelper};
use crate::errors::{Result, SolrError};

/// How documents with no value in the collapse field are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    Ignore,
    Expand,
    Collapse,
}

impl NullPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullPolicy::Ignore => "ignore",
            NullPolicy::Expand => "expand",
            NullPolicy::Collapse => "collapse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseHint {
    /// Use the top-level field cache, only valid for string fields.
    TopFc,
}

impl CollapseHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollapseHint::TopFc => "top_fc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum GroupHead {
    Min(String),
    Max(String),
    Sort(String),
}

/// `{!collapse field=...}` post filter keeping one document per group.
#[derive(Debug, Clone, PartialEq)]
pub struct Collapse {
    field: String,
    group_head: Option<GroupHead>,
    null_policy: Option<NullPolicy>,
    hint: Option<CollapseHint>,
    size: Option<u32>,
    cache: Option<bool>,
}

impl Collapse {
    pub fn create(field: &str) -> Result<Self> {
        validate_field_name("Collapse", field)?;

        Ok(Self {
            field: field.to_string(),
            group_head: None,
            null_policy: None,
            hint: None,
            size: None,
            cache: None,
        })
    }

    /// Selects the group head with the smallest value of a field or function.
    pub fn min(self, expression: &str) -> Result<Self> {
        self.with_group_head("min", expression, GroupHead::Min)
    }

    pub fn max(self, expression: &str) -> Result<Self> {
        self.with_group_head("max", expression, GroupHead::Max)
    }

    /// Selects the group head by a sort spec such as `price asc, id desc`.
    pub fn sort(self, sort: &str) -> Result<Self> {
        self.with_group_head("sort", sort, GroupHead::Sort)
    }

    pub fn null_policy(mut self, policy: NullPolicy) -> Self {
        self.null_policy = Some(policy);
        self
    }

    pub fn hint(mut self, hint: CollapseHint) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Initial capacity of the collapse map.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    // min, max and sort are mutually exclusive: the last one set wins.
    fn with_group_head(
        mut self,
        name: &str,
        value: &str,
        make: fn(String) -> GroupHead,
    ) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(SolrError::InvalidArgument(format!(
                "Collapse {} must not be empty.",
                name
            )));
        }
        self.group_head = Some(make(value.to_string()));
        Ok(self)
    }
}

impl QueryHelper for Collapse {
    fn to_query_string(&self) -> String {
        let mut out = format!("{{!collapse field={}", self.field);
        match &self.group_head {
            Some(GroupHead::Min(v)) => {
                let _ = write!(out, " min={}", local_param_value(v));
            }
            Some(GroupHead::Max(v)) => {
                let _ = write!(out, " max={}", local_param_value(v));
            }
            Some(GroupHead::Sort(v)) => {
                let _ = write!(out, " sort={}", local_param_value(v));
            }
            None => {}
        }
        if let Some(policy) = self.null_policy {
            let _ = write!(out, " nullPolicy={}", policy.as_str());
        }
        if let Some(hint) = self.hint {
            let _ = write!(out, " hint={}", hint.as_str());
        }
        if let Some(size) = self.size {
            let _ = write!(out, " size={}", size);
        }
        if let Some(cache) = self.cache {
            let _ = write!(out, " cache={}", cache);
        }
        out.push('}');
        out
    }
}
