//! HTTP client for the destination imports service.
//!
//! Each object record is rendered to an import document and POSTed to the
//! service's `imports` endpoint with basic authentication.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use cts_model::ObjectRecord;
use cts_output::write_import_xml;

use crate::error::{Result, SubmitError};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How much of a rejection body to keep for the error message.
const BODY_SNIPPET_LEN: usize = 512;

/// Basic-auth credentials for the import service.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account name.
    pub user: String,
    /// Account password.
    pub password: String,
}

/// Client for submitting records to the imports service.
#[derive(Debug)]
pub struct ImportClient {
    /// HTTP client.
    client: Client,
    /// Service base URL, without the `imports` path segment.
    base_url: String,
    /// Credentials sent with every request.
    credentials: Credentials,
}

impl ImportClient {
    /// Create a new client for the service at `base_url`.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        if base_url.is_empty() {
            return Err(SubmitError::Configuration(
                "service URL must not be empty".to_string(),
            ));
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Get the imports endpoint URL.
    fn imports_url(&self) -> String {
        format!("{}/imports", self.base_url)
    }

    /// Submit one record to the imports service.
    ///
    /// Returns `Ok(())` when the service reports success; a rejection keeps
    /// the status and a snippet of the response body for diagnosis.
    pub fn submit(&self, record: &ObjectRecord) -> Result<()> {
        let object = record.object_id().to_string();

        let body = write_import_xml(record).map_err(|err| SubmitError::Document {
            object: object.clone(),
            message: err.to_string(),
        })?;

        debug!("Submitting {} to {}", object, self.imports_url());

        let response = self
            .client
            .post(self.imports_url())
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
            .header(CONTENT_TYPE, "application/xml")
            .body(body)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_else(|_| "<no body>".to_string());
            warn!("Import of {} rejected with status {}", object, status);
            return Err(SubmitError::Rejected {
                object,
                status,
                body: snippet(&body),
            });
        }

        debug!("Inserted {}", object);
        Ok(())
    }
}

/// Truncate a response body on a character boundary for error reporting.
fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_LEN {
        return body.to_string();
    }
    let mut end = BODY_SNIPPET_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
