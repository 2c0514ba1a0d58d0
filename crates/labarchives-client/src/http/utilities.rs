/*
[INPUT]:  Login name or email and password
[OUTPUT]: Institutional (SSO) login URLs
[POS]:    HTTP layer - utilities endpoints
[UPDATE]: When adding new utility endpoints
*/

use crate::http::client::ApiRequest;
use crate::http::query::QueryBuilder;
use crate::http::{LabArchivesClient, Result};
use crate::types::{ApiMethod, Credential, Node};

impl LabArchivesClient {
    /// Institutional login URLs for a user
    ///
    /// GET /utilities/institutional_login_urls?login_or_email={login}&password={password}
    pub async fn institutional_login_urls(
        &self,
        credential: &Credential,
        login_or_email: &str,
        password: &str,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("login_or_email", login_or_email)
            .push("password", password);
        self.execute(
            credential,
            ApiRequest::get(ApiMethod::InstitutionalLoginUrls, query),
        )
        .await
    }
}
