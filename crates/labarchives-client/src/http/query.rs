/*
[INPUT]:  Caller-supplied parameter values, credential and call signature
[OUTPUT]: Percent-encoded query strings ending in akid/expires/sig
[POS]:    HTTP layer - query string assembly shared by every endpoint
[UPDATE]: When the auth trailer or encoding rules change
*/

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::auth::Signature;
use crate::types::Credential;

/// Characters left as-is by `encodeURIComponent`: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Ordered `key=value` pairs joined with `&`
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    pairs: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, percent-encoding the value
    pub fn push(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.pairs
            .push(format!("{key}={}", encode_component(value.as_ref())));
        self
    }

    /// Append a pair only when the value is present and non-empty
    pub fn push_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.push(key, value),
            _ => self,
        }
    }

    /// Append the auth trailer and render the query string
    pub fn finish(mut self, credential: &Credential, signature: &Signature) -> String {
        self.pairs.push(format!(
            "akid={}",
            encode_component(&credential.access_key_id)
        ));
        self.pairs.push(format!("expires={}", signature.expires));
        // already percent-encoded by the signer
        self.pairs.push(format!("sig={}", signature.signature));
        self.pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a b&c=d", "a%20b%26c%3Dd")]
    #[case("user@example.com", "user%40example.com")]
    #[case("p+ss/w=rd?", "p%2Bss%2Fw%3Drd%3F")]
    #[case("keep-_.!~*'()", "keep-_.!~*'()")]
    #[case("Ünïcode", "%C3%9Cn%C3%AFcode")]
    fn test_encode_component(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_component(input), expected);
    }

    #[test]
    fn test_trailer_is_last() {
        let credential = Credential::new("AK ID", "secret", "https://api.example.com", "/api");
        let signature = Signature {
            signature: "abc%2B%3D".to_string(),
            expires: 1_700_000_000_000,
        };

        let query = QueryBuilder::new()
            .push("uid", "u 1")
            .push_opt("user_role", None)
            .push_opt("fullname", Some(""))
            .push("nbid", "77")
            .finish(&credential, &signature);

        assert_eq!(
            query,
            "uid=u%201&nbid=77&akid=AK%20ID&expires=1700000000000&sig=abc%2B%3D"
        );
    }
}
