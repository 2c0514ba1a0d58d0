/*
[INPUT]:  User ids, notebook ids, names and sharing targets
[OUTPUT]: Notebook metadata, new notebooks, notebook membership changes
[POS]:    HTTP layer - notebooks endpoints
[UPDATE]: When adding new notebook endpoints or changing query parameters
*/

use crate::http::client::ApiRequest;
use crate::http::query::QueryBuilder;
use crate::http::{LabArchivesClient, Result};
use crate::types::{ApiMethod, Credential, Node};

impl LabArchivesClient {
    /// Notebook metadata
    ///
    /// GET /notebooks/notebook_info?uid={uid}&nbid={nbid}
    pub async fn notebook_info(&self, credential: &Credential, uid: &str, nbid: &str) -> Result<Node> {
        let query = QueryBuilder::new().push("uid", uid).push("nbid", nbid);
        self.execute(credential, ApiRequest::get(ApiMethod::NotebookInfo, query))
            .await
    }

    /// Create a notebook owned by `uid`
    ///
    /// GET /notebooks/create_notebook?uid={uid}&name={name}[&initial_folders={..}][&site_notebook_id={..}]
    pub async fn create_notebook(
        &self,
        credential: &Credential,
        uid: &str,
        name: &str,
        site_notebook_id: Option<&str>,
        initial_folders: Option<&str>,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("uid", uid)
            .push("name", name)
            .push_opt("initial_folders", initial_folders)
            .push_opt("site_notebook_id", site_notebook_id);
        self.execute(credential, ApiRequest::get(ApiMethod::CreateNotebook, query))
            .await
    }

    /// Grant `email` access to a notebook, optionally with a role
    ///
    /// GET /notebooks/add_user_to_notebook?uid={uid}&nbid={nbid}&email={email}[&user_role={role}]
    pub async fn add_user_to_notebook(
        &self,
        credential: &Credential,
        uid: &str,
        nbid: &str,
        email: &str,
        user_role: Option<&str>,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("uid", uid)
            .push("nbid", nbid)
            .push("email", email)
            .push_opt("user_role", user_role);
        self.execute(
            credential,
            ApiRequest::get(ApiMethod::AddUserToNotebook, query),
        )
        .await
    }
}
