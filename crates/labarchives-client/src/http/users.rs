/*
[INPUT]:  Login credentials, user ids and email addresses
[OUTPUT]: User summaries, profiles with notebooks, account existence, new accounts
[POS]:    HTTP layer - users endpoints
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use crate::http::client::ApiRequest;
use crate::http::query::QueryBuilder;
use crate::http::{LabArchivesClient, Result};
use crate::types::{ApiMethod, Credential, Node};

impl LabArchivesClient {
    /// Authenticate a user and return their summary (`users/id`, `users/email`, ...)
    ///
    /// GET /users/user_access_info?login_or_email={login}&password={password}
    pub async fn access_info(
        &self,
        credential: &Credential,
        login_or_email: &str,
        password: &str,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("login_or_email", login_or_email)
            .push("password", password);
        self.execute(credential, ApiRequest::get(ApiMethod::UserAccessInfo, query))
            .await
    }

    /// User profile including `notebooks/notebook`
    ///
    /// GET /users/user_info_via_id?uid={uid}[&authenticated=true]
    pub async fn user_info_via_id(
        &self,
        credential: &Credential,
        uid: &str,
        authenticated: bool,
    ) -> Result<Node> {
        let mut query = QueryBuilder::new().push("uid", uid);
        if authenticated {
            query = query.push("authenticated", "true");
        }
        self.execute(credential, ApiRequest::get(ApiMethod::UserInfoViaId, query))
            .await
    }

    /// Whether an account exists for `email`
    ///
    /// GET /users/email_has_account?email={email}
    pub async fn email_has_account(&self, credential: &Credential, email: &str) -> Result<Node> {
        let query = QueryBuilder::new().push("email", email);
        self.execute(credential, ApiRequest::get(ApiMethod::EmailHasAccount, query))
            .await
    }

    /// Provision a new account
    ///
    /// GET /users/create_user_account?email={email}[&fullname={name}][&password={password}]
    pub async fn create_user_account(
        &self,
        credential: &Credential,
        email: &str,
        fullname: Option<&str>,
        password: Option<&str>,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("email", email)
            .push_opt("fullname", fullname)
            .push_opt("password", password);
        self.execute(
            credential,
            ApiRequest::get(ApiMethod::CreateUserAccount, query),
        )
        .await
    }
}
