use std::fmt::Write as _;

use super::{local_param_value, validate_field_name, QueryHelper};
use crate::errors::{Result, SolrError};

const DEFAULT_SEPARATOR: &str = ",";

/// Query implementation used by the terms query parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsMethod {
    TermsFilter,
    BooleanQuery,
    Automaton,
    DocValuesTermsFilter,
    DocValuesTermsFilterTopLevel,
    DocValuesTermsFilterPerSegment,
}

impl TermsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermsMethod::TermsFilter => "termsFilter",
            TermsMethod::BooleanQuery => "booleanQuery",
            TermsMethod::Automaton => "automaton",
            TermsMethod::DocValuesTermsFilter => "docValuesTermsFilter",
            TermsMethod::DocValuesTermsFilterTopLevel => "docValuesTermsFilterTopLevel",
            TermsMethod::DocValuesTermsFilterPerSegment => "docValuesTermsFilterPerSegment",
        }
    }
}

/// `{!terms f=field}v1,v2,...` filter matching any of a list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Terms {
    field: String,
    values: Vec<String>,
    separator: String,
    method: Option<TermsMethod>,
    cache: Option<bool>,
}

impl Terms {
    pub fn create<I, V>(field: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        validate_field_name("Terms", field)?;

        Ok(Self {
            field: field.to_string(),
            values: values.into_iter().map(|v| v.to_string()).collect(),
            separator: DEFAULT_SEPARATOR.to_string(),
            method: None,
            cache: None,
        })
    }

    pub fn separator(mut self, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(SolrError::InvalidArgument(
                "Terms separator must not be empty.".to_string(),
            ));
        }
        self.separator = separator.to_string();
        Ok(self)
    }

    pub fn method(mut self, method: TermsMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }
}

impl QueryHelper for Terms {
    fn to_query_string(&self) -> String {
        let mut out = format!("{{!terms f={}", self.field);
        if self.separator != DEFAULT_SEPARATOR {
            let _ = write!(out, " separator={}", local_param_value(&self.separator));
        }
        if let Some(method) = self.method {
            let _ = write!(out, " method={}", method.as_str());
        }
        if let Some(cache) = self.cache {
            let _ = write!(out, " cache={}", cache);
        }
        out.push('}');
        out.push_str(&self.values.join(&self.separator));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_terms() {
        let terms = Terms::create("id", [1, 3]).unwrap();
        assert_eq!(terms.to_query_string(), "{!terms f=id}1,3");
    }

    #[test]
    fn test_custom_separator_and_cache() {
        let terms = Terms::create("id", [1, 3])
            .unwrap()
            .separator("\"")
            .unwrap()
            .cache(false);
        assert_eq!(
            terms.to_query_string(),
            "{!terms f=id separator='\"' cache=false}1\"3"
        );
    }

    #[test]
    fn test_method() {
        let terms = Terms::create("tag", ["rust", "solr"])
            .unwrap()
            .method(TermsMethod::BooleanQuery);
        assert_eq!(
            terms.to_query_string(),
            "{!terms f=tag method=booleanQuery}rust,solr"
        );
    }

    #[test]
    fn test_builder_leaves_receiver_unchanged() {
        let terms = Terms::create("id", ["x"]).unwrap();
        let cached = terms.clone().cache(true);
        assert_eq!(terms.to_query_string(), "{!terms f=id}x");
        assert_eq!(cached.to_query_string(), "{!terms f=id cache=true}x");
    }

    #[test]
    fn test_empty_values_render_empty_list() {
        let terms = Terms::create("id", Vec::<String>::new()).unwrap();
        assert_eq!(terms.to_query_string(), "{!terms f=id}");
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Terms::create("", [1]).is_err());
        assert!(Terms::create("my field", [1]).is_err());

        let err = Terms::create("id", [1]).unwrap().separator("").unwrap_err();
        assert_eq!(
            err,
            SolrError::InvalidArgument("Terms separator must not be empty.".to_string())
        );
    }
}
