use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::config::{BasicAuth, ClientConfig};
use crate::errors::{Result, SolrError};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw status and body.
pub trait Transport {
    fn send(&self, method: Method, url: &str, body: String) -> Result<TransportResponse>;
}

/// Blocking reqwest transport.
pub struct HttpTransport {
    client: HttpClient,
    basic_auth: Option<BasicAuth>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field(
                "basic_auth_user",
                &self.basic_auth.as_ref().map(|auth| &auth.username),
            )
            .finish()
    }
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                SolrError::InvalidArgument(format!("Invalid header name \"{}\".", name))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                SolrError::InvalidArgument(format!("Invalid value for header \"{}\".", name))
            })?;
            headers.insert(name, value);
        }

        let timeout = config.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            basic_auth: config.basic_auth.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: Method, url: &str, body: String) -> Result<TransportResponse> {
        let request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let mut request = request
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(auth) = &self.basic_auth {
            request = request.basic_auth(&auth.username, auth.password.as_ref());
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_sends_json_body() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/update")
            .match_header("content-type", "application/json")
            .match_body(r#"{"commit":{}}"#)
            .with_status(200)
            .with_body(r#"{"responseHeader":{"status":0}}"#)
            .create();

        let transport = HttpTransport::new(&ClientConfig::new(server.url())).unwrap();
        let response = transport
            .send(
                Method::Post,
                &format!("{}/update", server.url()),
                r#"{"commit":{}}"#.to_string(),
            )
            .unwrap();

        mock.assert();
        assert!(response.is_success());
        assert_eq!(response.body, r#"{"responseHeader":{"status":0}}"#);
    }

    #[test]
    fn test_sends_configured_headers_and_auth() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/select")
            .match_header("x-request-source", "catalog")
            .match_header("authorization", Matcher::Regex("^Basic ".to_string()))
            .with_status(200)
            .with_body("{}")
            .create();

        let mut config = ClientConfig::new(server.url());
        config
            .headers
            .insert("X-Request-Source".to_string(), "catalog".to_string());
        config.basic_auth = Some(BasicAuth {
            username: "solr".to_string(),
            password: Some("SolrRocks".to_string()),
        });

        let transport = HttpTransport::new(&config).unwrap();
        transport
            .send(
                Method::Get,
                &format!("{}/select", server.url()),
                "{}".to_string(),
            )
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_reports_status_without_failing() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/select")
            .with_status(404)
            .with_body("not found")
            .create();

        let transport = HttpTransport::new(&ClientConfig::new(server.url())).unwrap();
        let response = transport
            .send(
                Method::Get,
                &format!("{}/select", server.url()),
                String::new(),
            )
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[test]
    fn test_invalid_header_name() {
        let mut config = ClientConfig::new("http://127.0.0.1");
        config
            .headers
            .insert("bad header".to_string(), "x".to_string());
        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, SolrError::InvalidArgument(_)));
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        let transport = HttpTransport::new(&ClientConfig::new("http://127.0.0.1:1")).unwrap();
        let err = transport
            .send(Method::Get, "http://127.0.0.1:1/select", String::new())
            .unwrap_err();
        assert!(matches!(err, SolrError::Transport(_)));
    }
}
