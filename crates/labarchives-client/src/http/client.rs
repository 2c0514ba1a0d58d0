/*
[INPUT]:  HTTP configuration (timeouts), clock, per-call credential
[OUTPUT]: Signed requests sent with reqwest and decoded XML responses
[POS]:    HTTP layer - core client implementation and shared request envelope
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::auth::{CallSigner, Clock, SystemClock};
use crate::http::query::QueryBuilder;
use crate::http::{LabArchivesError, Result};
use crate::types::{ApiMethod, Credential, Node, decode};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// One API call before it is signed
#[derive(Debug)]
pub(crate) struct ApiRequest {
    pub method: ApiMethod,
    pub query: QueryBuilder,
    /// Form-encoded POST body; `None` sends a GET
    pub form: Option<Vec<(&'static str, String)>>,
}

impl ApiRequest {
    pub fn get(method: ApiMethod, query: QueryBuilder) -> Self {
        Self {
            method,
            query,
            form: None,
        }
    }

    pub fn post_form(
        method: ApiMethod,
        query: QueryBuilder,
        form: Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            method,
            query,
            form: Some(form),
        }
    }
}

/// Main HTTP client for the LabArchives API
///
/// Holds no credential; every operation is handed one explicitly.
#[derive(Debug, Clone)]
pub struct LabArchivesClient {
    http_client: Client,
    clock: Arc<dyn Clock>,
}

impl LabArchivesClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a client whose signatures use `clock` for `expires`
    pub fn with_clock(config: ClientConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { http_client, clock })
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Sign and assemble the full request target for `request`
    pub(crate) fn signed_url(&self, credential: &Credential, request: &ApiRequest) -> Result<Url> {
        let signature = CallSigner::new(credential).sign_now(request.method.as_str(), self.clock())?;
        let query = request.query.clone().finish(credential, &signature);
        let target = format!(
            "{}/{}/{}?{}",
            credential.api_root(),
            request.method.category(),
            request.method,
            query
        );
        Ok(Url::parse(&target)?)
    }

    /// Sign, send and decode one call
    pub(crate) async fn execute(&self, credential: &Credential, request: ApiRequest) -> Result<Node> {
        let url = self.signed_url(credential, &request)?;
        let request_id = Uuid::new_v4();
        let verb = if request.form.is_some() {
            Method::POST
        } else {
            Method::GET
        };

        debug!(
            %request_id,
            category = %request.method.category(),
            method = %request.method,
            verb = %verb,
            "sending request"
        );

        let builder = match request.form {
            Some(form) => {
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(form)
                    .finish();
                self.http_client
                    .request(Method::POST, url)
                    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .header(ACCEPT, "*/*")
                    .body(body)
            }
            None => self.http_client.request(Method::GET, url),
        };

        let response = builder.send().await?;
        let status = response.status();
        let failure = response.error_for_status_ref().err();
        let body = response.bytes().await?;

        trace!(%request_id, status = status.as_u16(), bytes = body.len(), "response received");

        match failure {
            None => Ok(decode(&body)?),
            Some(err) if body.is_empty() => {
                debug!(%request_id, status = status.as_u16(), "request failed without a body");
                Err(LabArchivesError::from(err))
            }
            Some(_) => {
                debug!(%request_id, status = status.as_u16(), "request rejected by service");
                let decoded = decode(&body)?;
                Err(LabArchivesError::application(status, decoded))
            }
        }
    }
}
