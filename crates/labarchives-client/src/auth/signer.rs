/*
[INPUT]:  Credential (access key id + secret), API method name, expiry timestamp
[OUTPUT]: URL-safe HMAC-SHA1 call signatures bound to a single `expires` value
[POS]:    Auth layer - per-call request authentication
[UPDATE]: When changing signing algorithm or signature encoding
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use sha1::Sha1;

use crate::auth::Clock;
use crate::http::query::URI_COMPONENT;
use crate::http::{LabArchivesError, Result};
use crate::types::Credential;

type HmacSha1 = Hmac<Sha1>;

/// A signature for exactly one API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Base64 digest, already percent-encoded for the query string
    pub signature: String,
    /// Epoch milliseconds the digest was computed over
    pub expires: u64,
}

impl Signature {
    /// The base64 digest without percent-encoding
    pub fn raw_signature(&self) -> String {
        percent_decode_str(&self.signature)
            .decode_utf8_lossy()
            .into_owned()
    }
}

/// Signs API method calls with a credential's secret
#[derive(Debug)]
pub struct CallSigner<'a> {
    credential: &'a Credential,
}

impl<'a> CallSigner<'a> {
    pub fn new(credential: &'a Credential) -> Self {
        Self { credential }
    }

    /// Sign `method` using the clock's current time as `expires`.
    pub fn sign_now(&self, method: &str, clock: &dyn Clock) -> Result<Signature> {
        self.sign(method, clock.now_millis())
    }

    /// Sign `method` for an explicit `expires` value.
    ///
    /// The salt is `access_key_id ‖ method ‖ expires` with no delimiters.
    pub fn sign(&self, method: &str, expires: u64) -> Result<Signature> {
        if self.credential.secret.is_empty() {
            return Err(LabArchivesError::Signature("secret is empty".to_string()));
        }

        let salt = format!("{}{}{}", self.credential.access_key_id, method, expires);
        let digest = hmac_sha1_base64(self.credential.secret.as_bytes(), salt.as_bytes())?;

        Ok(Signature {
            signature: utf8_percent_encode(&digest, URI_COMPONENT).to_string(),
            expires,
        })
    }
}

/// HMAC-SHA1 of `message` under `key`, base64 encoded
pub fn hmac_sha1_base64(key: &[u8], message: &[u8]) -> Result<String> {
    let mut mac = HmacSha1::new_from_slice(key)
        .map_err(|err| LabArchivesError::Signature(err.to_string()))?;
    mac.update(message);
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
