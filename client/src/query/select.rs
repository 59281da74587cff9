use serde::Serialize;
use serde_json::{Map, Value};

use super::helper::Filter;
use super::JsonQuery;
use crate::errors::{json_type_name, Result, SolrError};

/// Recognized keys with their declared types, in serialization order.
const FIELD_TYPES: [(&str, &str); 8] = [
    ("query", "string"),
    ("filter", "array"),
    ("fields", "array"),
    ("facet", "object"),
    ("sort", "string"),
    ("offset", "integer"),
    ("limit", "integer"),
    ("params", "object"),
];

/// Body of a request to the `/select` endpoint.
///
/// Every setter consumes the query and returns a new one, so a base query
/// can be cloned and specialized without affecting other copies.
///
/// ```
/// use solr_client::query::SelectQuery;
/// use solr_client::query::JsonQuery;
///
/// let query = SelectQuery::create().query("*:*").limit(10);
/// assert_eq!(query.to_json().unwrap(), r#"{"query":"*:*","limit":10}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectQuery {
    #[serde(skip_serializing_if = "is_blank")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    filter: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    facet: Map<String, Value>,
    #[serde(skip_serializing_if = "is_blank")]
    sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u64>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    params: Map<String, Value>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl SelectQuery {
    pub fn create() -> Self {
        Self::default()
    }

    /// Builds a query from a partial mapping restricted to the recognized keys.
    pub fn from_map(body: Map<String, Value>) -> Result<Self> {
        let invalid: Vec<&str> = body
            .keys()
            .map(String::as_str)
            .filter(|key| declared_type(key).is_none())
            .collect();
        if !invalid.is_empty() {
            return Err(SolrError::InvalidArgument(format!(
                "Invalid keys \"{}\" found. Valid keys are \"{}\".",
                invalid.join(", "),
                valid_keys().join(", ")
            )));
        }

        let mut query = Self::default();
        for (key, value) in body {
            query = match (key.as_str(), value) {
                ("query", Value::String(q)) => query.query(q),
                ("sort", Value::String(s)) => query.sort(s),
                ("filter", Value::Array(items)) => {
                    let filters = items
                        .into_iter()
                        .map(filter_from_value)
                        .collect::<Result<Vec<_>>>()?;
                    query.filter(filters)
                }
                ("fields", Value::Array(items)) => {
                    let fields = items
                        .into_iter()
                        .map(|item| match item {
                            Value::String(s) => Ok(s),
                            other => Err(SolrError::InvalidArgument(format!(
                                "Field \"fields\" can contain only strings, but \"{}\" given.",
                                json_type_name(&other)
                            ))),
                        })
                        .collect::<Result<Vec<_>>>()?;
                    query.fields(fields)
                }
                ("facet", Value::Object(facet)) => query.facet(facet),
                ("params", Value::Object(params)) => query.params(params),
                ("offset", value @ Value::Number(_)) if json_type_name(&value) == "integer" => {
                    query.offset(non_negative("offset", &value)?)
                }
                ("limit", value @ Value::Number(_)) if json_type_name(&value) == "integer" => {
                    query.limit(non_negative("limit", &value)?)
                }
                (key, value) => {
                    return Err(SolrError::InvalidArgument(format!(
                        "Type of field \"{}\" should be \"{}\", \"{}\" given.",
                        key,
                        declared_type(key).unwrap_or("unknown"),
                        json_type_name(&value)
                    )));
                }
            };
        }
        Ok(query)
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Replaces all filters.
    pub fn filter<I, F>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Filter>,
    {
        self.filter = filters.into_iter().map(|f| f.into().render()).collect();
        self
    }

    /// Appends one filter to the existing ones.
    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter.push(filter.into().render());
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// JSON Facet API definitions, keyed by facet name.
    pub fn facet(mut self, facet: Map<String, Value>) -> Self {
        self.facet = facet;
        self
    }

    /// Extra request parameters passed through as-is.
    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    /// Unlike empty strings and lists, `offset(0)` is sent as `"offset":0`.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// `limit(0)` is sent as `"limit":0` rather than omitted, so facet-only
    /// requests can ask Solr for no documents.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[String] {
        &self.filter
    }
}

impl JsonQuery for SelectQuery {
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl TryFrom<Value> for SelectQuery {
    type Error = SolrError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(body) => Self::from_map(body),
            other => Err(SolrError::InvalidArgument(format!(
                "SelectQuery can be built only from an object, \"{}\" given.",
                json_type_name(&other)
            ))),
        }
    }
}

fn valid_keys() -> Vec<&'static str> {
    FIELD_TYPES.iter().map(|(name, _)| *name).collect()
}

fn declared_type(key: &str) -> Option<&'static str> {
    FIELD_TYPES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, ty)| *ty)
}

fn filter_from_value(value: Value) -> Result<Filter> {
    match value {
        Value::String(s) => Ok(Filter::Query(s)),
        other => Err(SolrError::InvalidArgument(format!(
            "SelectQuery filter can accept only string or query helper, but \"{}\" given.",
            json_type_name(&other)
        ))),
    }
}

fn non_negative(key: &str, value: &Value) -> Result<u64> {
    value.as_u64().ok_or_else(|| {
        SolrError::InvalidArgument(format!(
            "Field \"{}\" should be a non-negative integer, {} given.",
            key, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::helper::{Collapse, Terms};
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn test_empty_query_serializes_to_empty_object() {
        assert_eq!(SelectQuery::create().to_json().unwrap(), "{}");
    }

    #[test]
    fn test_query_all() {
        let query = SelectQuery::create().query("*:*");
        assert_eq!(query.to_json().unwrap(), r#"{"query":"*:*"}"#);
    }

    #[test]
    fn test_keys_follow_declared_order() {
        let query = SelectQuery::create()
            .params(object(json!({"debug": true})))
            .limit(10)
            .offset(20)
            .sort("id desc")
            .facet(object(json!({"categories": {"type": "terms", "field": "cat"}})))
            .fields(["id", "name"])
            .with_filter("inStock:true")
            .query("name:ipod");

        assert_eq!(
            query.to_json().unwrap(),
            concat!(
                r#"{"query":"name:ipod","filter":["inStock:true"],"fields":["id","name"],"#,
                r#""facet":{"categories":{"type":"terms","field":"cat"}},"sort":"id desc","#,
                r#""offset":20,"limit":10,"params":{"debug":true}}"#
            )
        );
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let query = SelectQuery::create()
            .query("")
            .sort("")
            .fields(Vec::<String>::new())
            .filter(Vec::<Filter>::new())
            .params(Map::new())
            .limit(0);
        assert_eq!(query.to_json().unwrap(), r#"{"limit":0}"#);
    }

    #[test]
    fn test_zero_offset_and_limit_are_sent() {
        let query = SelectQuery::create().query("*:*").offset(0).limit(0);
        assert_eq!(
            query.to_json().unwrap(),
            r#"{"query":"*:*","offset":0,"limit":0}"#
        );
    }

    #[test]
    fn test_unicode_is_not_escaped() {
        let query = SelectQuery::create().query("city:Győr");
        assert_eq!(query.to_json().unwrap(), r#"{"query":"city:Győr"}"#);
    }

    #[test]
    fn test_mutators_return_new_values() {
        let base = SelectQuery::create().query("*:*");
        let before = base.to_json().unwrap();

        let limited = base.clone().limit(5);
        let sorted = base.clone().sort("id asc");

        assert_ne!(base, limited);
        assert_ne!(base, sorted);
        assert_eq!(base.to_json().unwrap(), before);
        assert_eq!(limited.to_json().unwrap(), r#"{"query":"*:*","limit":5}"#);
    }

    #[test]
    fn test_filter_accepts_strings_and_helpers() {
        let query = SelectQuery::create().filter(vec![
            Filter::from("type:book"),
            Collapse::create("sample_int").unwrap().cache(false).into(),
            Terms::create("id", [1, 3]).unwrap().into(),
        ]);
        assert_eq!(
            query.filters(),
            &[
                "type:book".to_string(),
                "{!collapse field=sample_int cache=false}".to_string(),
                "{!terms f=id}1,3".to_string(),
            ]
        );
    }

    #[test]
    fn test_filter_replaces_and_with_filter_appends() {
        let query = SelectQuery::create()
            .with_filter("a:1")
            .with_filter(Collapse::create("g").unwrap());
        assert_eq!(query.filters().len(), 2);

        let replaced = query.clone().filter(["b:2"]);
        assert_eq!(replaced.filters(), &["b:2".to_string()]);
        assert_eq!(query.filters().len(), 2);
    }

    #[test]
    fn test_from_map_valid() {
        let query = SelectQuery::from_map(object(json!({
            "limit": 2,
            "query": "*:*",
            "filter": ["inStock:true"],
            "fields": ["id"],
        })))
        .unwrap();

        assert_eq!(
            query.to_json().unwrap(),
            r#"{"query":"*:*","filter":["inStock:true"],"fields":["id"],"limit":2}"#
        );
    }

    #[test]
    fn test_from_map_rejects_unknown_keys() {
        let err = SelectQuery::from_map(object(json!({
            "query": "*:*",
            "rows": 10,
            "q": "x",
        })))
        .unwrap_err();

        assert_eq!(
            err,
            SolrError::InvalidArgument(
                "Invalid keys \"rows, q\" found. Valid keys are \"query, filter, fields, facet, sort, offset, limit, params\"."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_from_map_rejects_wrong_types() {
        let err = SelectQuery::from_map(object(json!({"query": 1}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type of field \"query\" should be \"string\", \"integer\" given."
        );

        let err = SelectQuery::from_map(object(json!({"limit": "10"}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type of field \"limit\" should be \"integer\", \"string\" given."
        );

        let err = SelectQuery::from_map(object(json!({"facet": []}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type of field \"facet\" should be \"object\", \"array\" given."
        );
    }

    #[test]
    fn test_from_map_rejects_non_string_filters() {
        let err = SelectQuery::from_map(object(json!({"filter": ["a:1", 5]}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "SelectQuery filter can accept only string or query helper, but \"integer\" given."
        );
    }

    #[test]
    fn test_from_map_rejects_negative_limit() {
        assert!(SelectQuery::from_map(object(json!({"limit": -1}))).is_err());
    }

    #[test]
    fn test_try_from_non_object() {
        let err = SelectQuery::try_from(json!(["query"])).unwrap_err();
        assert!(matches!(err, SolrError::InvalidArgument(_)));
    }
}
