/*
[INPUT]:  Caller-held key material (JSON key file, env vars, or literals)
[OUTPUT]: Credential carrying access key id, secret and endpoint
[POS]:    Data layer - per-call authentication and routing info
[UPDATE]: When key file format or endpoint defaults change
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::http::{LabArchivesError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.labarchives.com";
pub const DEFAULT_API_PATH: &str = "/api";

const ENV_KEY: &str = "LABARCHIVES_KEY";
const ENV_AKID: &str = "LABARCHIVES_AKID";
const ENV_SECRET: &str = "LABARCHIVES_SECRET";
const ENV_BASE_URL: &str = "LABARCHIVES_BASE_URL";
const ENV_API_PATH: &str = "LABARCHIVES_API_PATH";

/// Access key and endpoint used to sign and route every call
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(alias = "akid")]
    pub access_key_id: String,
    #[serde(alias = "password")]
    pub secret: String,
    #[serde(default = "default_base_url", alias = "baseurl")]
    pub base_url: String,
    #[serde(default = "default_api_path", alias = "api")]
    pub api_path: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

impl Credential {
    pub fn new(
        access_key_id: impl Into<String>,
        secret: impl Into<String>,
        base_url: impl Into<String>,
        api_path: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret: secret.into(),
            base_url: base_url.into(),
            api_path: api_path.into(),
        }
    }

    /// Parse a JSON key document, e.g. `{"akid": "...", "password": "..."}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let credential: Self = serde_json::from_str(json)?;
        credential.validate()?;
        Ok(credential)
    }

    /// Load a JSON key file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load from `LABARCHIVES_KEY` (JSON) or the individual `LABARCHIVES_*` variables
    pub fn from_env() -> Result<Self> {
        if let Ok(json) = std::env::var(ENV_KEY) {
            return Self::from_json_str(&json);
        }

        let access_key_id = std::env::var(ENV_AKID)
            .map_err(|_| LabArchivesError::Credential(format!("{ENV_AKID} is not set")))?;
        let secret = std::env::var(ENV_SECRET)
            .map_err(|_| LabArchivesError::Credential(format!("{ENV_SECRET} is not set")))?;
        let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url());
        let api_path = std::env::var(ENV_API_PATH).unwrap_or_else(|_| default_api_path());

        let credential = Self::new(access_key_id, secret, base_url, api_path);
        credential.validate()?;
        Ok(credential)
    }

    fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(LabArchivesError::Credential(
                "access key id is empty".to_string(),
            ));
        }
        if self.secret.is_empty() {
            return Err(LabArchivesError::Credential("secret is empty".to_string()));
        }
        Ok(())
    }

    /// `base_url + api_path` with slashes normalized
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.api_path.trim_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &self.access_key_id)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_path", &self.api_path)
            .finish()
    }
}
