#[derive(Debug, Clone, PartialEq)]
pub enum SolrError {
    InvalidArgument(String),
    Config(String),
    Serialization(String),
    Transport(String),
    HttpStatus { status: u16, body: String },
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SolrError>;

impl From<reqwest::Error> for SolrError {
    fn from(error: reqwest::Error) -> Self {
        SolrError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for SolrError {
    fn from(error: serde_json::Error) -> Self {
        SolrError::Serialization(error.to_string())
    }
}

impl From<SolrError> for String {
    fn from(error: SolrError) -> Self {
        error.to_string()
    }
}

impl std::fmt::Display for SolrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolrError::InvalidArgument(msg) => write!(f, "{}", msg),
            SolrError::Config(msg) => write!(f, "Config error: {}", msg),
            SolrError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            SolrError::Transport(msg) => write!(f, "Transport error: {}", msg),
            SolrError::HttpStatus { status, body } => {
                write!(f, "Solr responded with HTTP {}: {}", status, body)
            }
            SolrError::Decode(msg) => write!(f, "Failed to decode Solr response: {}", msg),
        }
    }
}

impl std::error::Error for SolrError {}

/// Name of a JSON value's type as used in validation messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "double",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
