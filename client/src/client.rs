use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::errors::{json_type_name, Result, SolrError};
use crate::query::command::to_update_body;
use crate::query::{
    Add, Command, Commit, Delete, JsonQuery, Optimize, SelectQuery, UpdateCommand, UpdateQuery,
};
use crate::transport::{HttpTransport, Method, Transport};

/// Body accepted by [`Client::select`].
#[derive(Debug, Clone, PartialEq)]
pub enum SelectRequest {
    Raw(String),
    Query(SelectQuery),
}

/// Body accepted by [`Client::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRequest {
    Raw(String),
    Query(UpdateQuery),
    Command(UpdateCommand),
}

impl From<&str> for SelectRequest {
    fn from(body: &str) -> Self {
        SelectRequest::Raw(body.to_string())
    }
}

impl From<String> for SelectRequest {
    fn from(body: String) -> Self {
        SelectRequest::Raw(body)
    }
}

impl From<SelectQuery> for SelectRequest {
    fn from(query: SelectQuery) -> Self {
        SelectRequest::Query(query)
    }
}

/// Strings are sent verbatim, objects are validated as a [`SelectQuery`].
impl TryFrom<Value> for SelectRequest {
    type Error = SolrError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(body) => Ok(SelectRequest::Raw(body)),
            Value::Object(body) => Ok(SelectRequest::Query(SelectQuery::from_map(body)?)),
            other => Err(unsupported_body("SelectQuery", &other)),
        }
    }
}

impl From<&str> for UpdateRequest {
    fn from(body: &str) -> Self {
        UpdateRequest::Raw(body.to_string())
    }
}

impl From<String> for UpdateRequest {
    fn from(body: String) -> Self {
        UpdateRequest::Raw(body)
    }
}

impl From<UpdateQuery> for UpdateRequest {
    fn from(query: UpdateQuery) -> Self {
        UpdateRequest::Query(query)
    }
}

impl From<UpdateCommand> for UpdateRequest {
    fn from(command: UpdateCommand) -> Self {
        UpdateRequest::Command(command)
    }
}

impl From<Add> for UpdateRequest {
    fn from(command: Add) -> Self {
        UpdateRequest::Command(command.into())
    }
}

impl From<Delete> for UpdateRequest {
    fn from(command: Delete) -> Self {
        UpdateRequest::Command(command.into())
    }
}

impl From<Commit> for UpdateRequest {
    fn from(command: Commit) -> Self {
        UpdateRequest::Command(command.into())
    }
}

impl From<Optimize> for UpdateRequest {
    fn from(command: Optimize) -> Self {
        UpdateRequest::Command(command.into())
    }
}

/// Strings are sent verbatim, objects are serialized as they are.
impl TryFrom<Value> for UpdateRequest {
    type Error = SolrError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(body) => Ok(UpdateRequest::Raw(body)),
            Value::Object(_) => Ok(UpdateRequest::Raw(serde_json::to_string(&value)?)),
            other => Err(unsupported_body("UpdateQuery", &other)),
        }
    }
}

fn unsupported_body(query_type: &str, value: &Value) -> SolrError {
    SolrError::InvalidArgument(format!(
        "Client can accept only string or {}, but \"{}\" given.",
        query_type,
        json_type_name(value)
    ))
}

/// Sends queries to a single Solr core or collection.
pub struct Client<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl Client<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    /// Builds a client from a config mapping; `base_url` is required.
    pub fn create(config: Map<String, Value>) -> Result<Self> {
        Self::new(ClientConfig::from_map(config)?)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs a search against `{base_url}/select`.
    pub fn select(&self, query: impl Into<SelectRequest>) -> Result<Value> {
        let body = match query.into() {
            SelectRequest::Raw(body) => body,
            SelectRequest::Query(query) => query.to_json()?,
        };
        self.execute(Method::Get, "select", body, &[])
    }

    /// Sends commands to `{base_url}/update`.
    pub fn update(&self, query: impl Into<UpdateRequest>) -> Result<Value> {
        match query.into() {
            UpdateRequest::Raw(body) => self.execute(Method::Post, "update", body, &[]),
            UpdateRequest::Query(query) => {
                let names = query.command_names();
                self.execute(Method::Post, "update", query.to_json()?, &names)
            }
            UpdateRequest::Command(command) => {
                let body = to_update_body(&command)?;
                self.execute(Method::Post, "update", body, &[command.name()])
            }
        }
    }

    fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: String,
        commands: &[&str],
    ) -> Result<Value> {
        let url = self.config.endpoint_url(endpoint);
        if commands.is_empty() {
            tracing::debug!("Solr {} {}", method.as_str(), url);
        } else {
            tracing::debug!(
                "Solr {} {} commands=[{}]",
                method.as_str(),
                url,
                commands.join(", ")
            );
        }

        let response = self.transport.send(method, &url, body)?;
        if !response.is_success() {
            tracing::warn!(
                "Solr {} {} failed with HTTP {}",
                method.as_str(),
                url,
                response.status
            );
            return Err(SolrError::HttpStatus {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| SolrError::Decode(format!("{} (body: {})", e, response.body)))
    }
}
