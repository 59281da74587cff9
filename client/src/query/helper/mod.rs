use std::borrow::Cow;

use crate::errors::{Result, SolrError};

pub mod collapse;
pub mod terms;

pub use collapse::{Collapse, CollapseHint, NullPolicy};
pub use terms::{Terms, TermsMethod};

/// Builds a single filter query string in Solr local-params syntax,
/// e.g. `{!collapse field=group_id}`.
pub trait QueryHelper {
    fn to_query_string(&self) -> String;
}

/// One entry of a select query's `filter` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Query(String),
    Terms(Terms),
    Collapse(Collapse),
}

impl Filter {
    pub fn render(&self) -> String {
        match self {
            Filter::Query(q) => q.clone(),
            Filter::Terms(terms) => terms.to_query_string(),
            Filter::Collapse(collapse) => collapse.to_query_string(),
        }
    }
}

impl From<&str> for Filter {
    fn from(query: &str) -> Self {
        Filter::Query(query.to_string())
    }
}

impl From<String> for Filter {
    fn from(query: String) -> Self {
        Filter::Query(query)
    }
}

impl From<Terms> for Filter {
    fn from(terms: Terms) -> Self {
        Filter::Terms(terms)
    }
}

impl From<Collapse> for Filter {
    fn from(collapse: Collapse) -> Self {
        Filter::Collapse(collapse)
    }
}

const LOCAL_PARAM_SPECIAL: [char; 5] = ['\'', '"', '{', '}', '\\'];

pub(crate) fn validate_field_name(helper: &str, field: &str) -> Result<()> {
    if field.is_empty() {
        return Err(SolrError::InvalidArgument(format!(
            "{} field name must not be empty.",
            helper
        )));
    }
    if field.chars().any(char::is_whitespace) {
        return Err(SolrError::InvalidArgument(format!(
            "{} field name \"{}\" must not contain whitespace.",
            helper, field
        )));
    }
    // Field names are written into local params unquoted.
    if let Some(c) = field.chars().find(|c| LOCAL_PARAM_SPECIAL.contains(c)) {
        return Err(SolrError::InvalidArgument(format!(
            "{} field name \"{}\" must not contain '{}'.",
            helper, field, c
        )));
    }
    Ok(())
}

/// Quotes a local-param value when it would otherwise break the
/// `{!name key=value}` syntax.
pub(crate) fn local_param_value(value: &str) -> Cow<'_, str> {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || LOCAL_PARAM_SPECIAL.contains(&c));
    if !needs_quoting {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}
