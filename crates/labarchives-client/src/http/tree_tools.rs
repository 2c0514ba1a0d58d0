/*
[INPUT]:  User id, notebook id, parent tree node and node details
[OUTPUT]: One level of a notebook's folder/page tree, newly inserted nodes
[POS]:    HTTP layer - tree_tools endpoints
[UPDATE]: When adding new tree endpoints or changing query parameters
*/

use crate::http::client::ApiRequest;
use crate::http::query::QueryBuilder;
use crate::http::{LabArchivesClient, Result};
use crate::types::{ApiMethod, Credential, Node};

/// Tree id of a notebook's top level
pub const ROOT_TREE_ID: &str = "0";

impl LabArchivesClient {
    /// Children of `parent_tree_id` (use [`ROOT_TREE_ID`] for the top level)
    ///
    /// GET /tree_tools/get_tree_level?uid={uid}&nbid={nbid}&parent_tree_id={id}
    pub async fn get_tree_level(
        &self,
        credential: &Credential,
        uid: &str,
        nbid: &str,
        parent_tree_id: &str,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("uid", uid)
            .push("nbid", nbid)
            .push("parent_tree_id", parent_tree_id);
        self.execute(credential, ApiRequest::get(ApiMethod::GetTreeLevel, query))
            .await
    }

    /// Insert a folder or page under `parent_tree_id`
    ///
    /// GET /tree_tools/insert_node?uid={uid}&nbid={nbid}&parent_tree_id={id}&display_text={text}&is_folder={bool}
    pub async fn insert_node(
        &self,
        credential: &Credential,
        uid: &str,
        nbid: &str,
        parent_tree_id: &str,
        display_text: &str,
        is_folder: bool,
    ) -> Result<Node> {
        let query = QueryBuilder::new()
            .push("uid", uid)
            .push("nbid", nbid)
            .push("parent_tree_id", parent_tree_id)
            .push("display_text", display_text)
            .push("is_folder", if is_folder { "true" } else { "false" });
        self.execute(credential, ApiRequest::get(ApiMethod::InsertNode, query))
            .await
    }
}
