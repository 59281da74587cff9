//! Query builders and a blocking HTTP client for the Solr JSON Request API.
//!
//! ```no_run
//! use solr_client::query::{Collapse, SelectQuery, UpdateQuery};
//! use solr_client::{Client, ClientConfig};
//!
//! # fn main() -> solr_client::Result<()> {
//! let client = Client::new(ClientConfig::new("http://localhost:8983/solr/books"))?;
//!
//! let response = client.select(
//!     SelectQuery::create()
//!         .query("*:*")
//!         .filter([Collapse::create("author")?.cache(false)])
//!         .fields(["id", "title"])
//!         .limit(10),
//! )?;
//! println!("{}", response["response"]["docs"]);
//!
//! client.update(UpdateQuery::create().delete_by_ids(["33"]).commit())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod query;
pub mod transport;

pub use client::{Client, SelectRequest, UpdateRequest};
pub use config::{BasicAuth, ClientConfig};
pub use errors::{Result, SolrError};
pub use query::JsonQuery;
pub use transport::{HttpTransport, Method, Transport, TransportResponse};
