/*
[INPUT]:  User id (query) plus part type, page id, notebook id and entry content (form body)
[OUTPUT]: Newly created notebook entries
[POS]:    HTTP layer - entries endpoints (form POST, binary-capable response)
[UPDATE]: When adding new entry endpoints or changing the form fields
*/

use crate::http::client::ApiRequest;
use crate::http::query::QueryBuilder;
use crate::http::{LabArchivesClient, Result};
use crate::types::{ApiMethod, Credential, Node};

impl LabArchivesClient {
    /// Add a content entry to the page `pid`
    ///
    /// POST /entries/add_entry?uid={uid}
    /// Body: part_type={part_type}&pid={pid}&nbid={nbid}&entry_data={entry_data}
    pub async fn add_entry(
        &self,
        credential: &Credential,
        uid: &str,
        nbid: &str,
        pid: &str,
        part_type: &str,
        entry_data: &str,
    ) -> Result<Node> {
        let query = QueryBuilder::new().push("uid", uid);
        let form = vec![
            ("part_type", part_type.to_string()),
            ("pid", pid.to_string()),
            ("nbid", nbid.to_string()),
            ("entry_data", entry_data.to_string()),
        ];
        self.execute(
            credential,
            ApiRequest::post_form(ApiMethod::AddEntry, query, form),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, LabArchivesClient};
    use crate::types::{Credential, Node};
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_add_entry_posts_form() {
        let server = MockServer::start().await;
        let mock_response = r#"<entries>
              <entry>
                <eid>OTYuOHw=</eid>
                <part-type>text entry</part-type>
              </entry>
            </entries>"#;

        let _mock = Mock::given(method("POST"))
            .and(path("/api/entries/add_entry"))
            .and(query_param("uid", "u1"))
            .and(query_param("akid", "AKID123"))
            .and(header(
                "content-type",
                "application/x-www-form-urlencoded;charset=UTF-8",
            ))
            .and(body_string(
                "part_type=text+entry&pid=13&nbid=nb1&entry_data=%3Cp%3Ea+b%26c%3Dd%3C%2Fp%3E",
            ))
            .respond_with(
                ResponseTemplate::new(201).set_body_raw(mock_response, "application/octet-stream"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let credential = Credential::new("AKID123", "test-secret", server.uri(), "/api");
        let client = LabArchivesClient::with_config(ClientConfig::default()).expect("client init");

        let response = client
            .add_entry(&credential, "u1", "nb1", "13", "text entry", "<p>a b&c=d</p>")
            .await
            .expect("add_entry failed");

        assert_eq!(
            response.path(&["entries", "entry", "eid"]).and_then(Node::text),
            Some("OTYuOHw=")
        );

        let requests = server.received_requests().await.expect("recording enabled");
        let query = requests[0].url.query().expect("query");
        assert!(!query.contains("part_type"));
        assert!(!query.contains("entry_data"));
    }
}
