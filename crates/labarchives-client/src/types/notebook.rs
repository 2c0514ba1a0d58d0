/*
[INPUT]:  Decoded `users` / `notebooks` response trees
[OUTPUT]: Default-notebook lookup and thin typed views over user and notebook nodes
[POS]:    Data layer - client-side helpers over decoded responses
[UPDATE]: When response shapes of user or notebook endpoints change
*/

use serde::{Deserialize, Serialize};

use super::node::Node;

/// First notebook whose `is-default` text is exactly `"true"`.
///
/// `notebooks` is the `notebooks` node of a user response; its `notebook`
/// child may hold one notebook or a list of them.
pub fn get_default_notebook(notebooks: &Node) -> Option<&Node> {
    notebooks
        .get("notebook")?
        .items()
        .iter()
        .find(|notebook| notebook.get("is-default").is_some_and(Node::is_true))
}

impl Node {
    /// Default notebook of a decoded `user_info_via_id` / `user_access_info` response
    pub fn default_notebook(&self) -> Option<&Node> {
        let users = self.get("users").unwrap_or(self);
        get_default_notebook(users.get("notebooks")?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookSummary {
    pub id: String,
    pub name: String,
    pub is_default: bool,
}

impl NotebookSummary {
    pub fn from_node(node: &Node) -> Option<Self> {
        Some(Self {
            id: node.get("id")?.text()?.to_string(),
            name: node
                .get("name")
                .and_then(Node::text)
                .unwrap_or_default()
                .to_string(),
            is_default: node.get("is-default").is_some_and(Node::is_true),
        })
    }
}

/// All notebooks listed in a user response, in document order
pub fn user_notebooks(response: &Node) -> Vec<NotebookSummary> {
    let users = response.get("users").unwrap_or(response);
    users
        .path(&["notebooks", "notebook"])
        .map(|notebooks| {
            notebooks
                .items()
                .iter()
                .filter_map(NotebookSummary::from_node)
                .collect()
        })
        .unwrap_or_default()
}

/// Summary of the authenticated user from `user_access_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccess {
    pub id: String,
    pub email: Option<String>,
    pub fullname: Option<String>,
}

impl UserAccess {
    pub fn from_response(response: &Node) -> Option<Self> {
        let users = response.get("users")?;
        let field = |name: &str| users.get(name).and_then(Node::text).map(str::to_string);
        Some(Self {
            id: field("id")?,
            email: field("email"),
            fullname: field("fullname"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_INFO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <users>
          <id>285489257Ho's9^Lt4116011183268315271</id>
          <fullname>Jane Doe</fullname>
          <email>jane@example.com</email>
          <notebooks type="array">
            <notebook>
              <id>MTE0LjF8MjI0MjE4Lzg4LzcwNDkx</id>
              <name>Scratch</name>
              <is-default type="boolean">false</is-default>
            </notebook>
            <notebook>
              <id>NDk1MzQuMHwxMDI5LzQ2</id>
              <name>Lab Notes</name>
              <is-default type="boolean">true</is-default>
            </notebook>
            <notebook>
              <id>OTQuMXwyLzcx</id>
              <name>Also Default</name>
              <is-default type="boolean">true</is-default>
            </notebook>
          </notebooks>
        </users>"#;

    #[test]
    fn test_first_default_wins() {
        let response = Node::from_xml(USER_INFO).unwrap();
        let notebooks = response.path(&["users", "notebooks"]).unwrap();

        let default = get_default_notebook(notebooks).expect("default notebook");
        assert_eq!(default.get("name").and_then(Node::text), Some("Lab Notes"));
        assert_eq!(response.default_notebook(), Some(default));
    }

    #[test]
    fn test_no_default() {
        let response = Node::from_xml(
            "<notebooks><notebook><id>1</id><is-default>false</is-default></notebook></notebooks>",
        )
        .unwrap();
        assert!(get_default_notebook(response.get("notebooks").unwrap()).is_none());
    }

    #[test]
    fn test_empty_collection() {
        let response = Node::from_xml("<notebooks/>").unwrap();
        assert!(get_default_notebook(response.get("notebooks").unwrap()).is_none());
    }

    #[test]
    fn test_only_literal_true_matches() {
        let response = Node::from_xml(
            "<notebooks>
               <notebook><id>1</id><is-default>TRUE</is-default></notebook>
               <notebook><id>2</id><is-default>1</is-default></notebook>
             </notebooks>",
        )
        .unwrap();
        assert!(get_default_notebook(response.get("notebooks").unwrap()).is_none());
    }

    #[test]
    fn test_single_notebook() {
        let response = Node::from_xml(
            "<notebooks><notebook><id>1</id><is-default>true</is-default></notebook></notebooks>",
        )
        .unwrap();
        let default = get_default_notebook(response.get("notebooks").unwrap()).unwrap();
        assert_eq!(default.get("id").and_then(Node::text), Some("1"));
    }

    #[test]
    fn test_user_notebooks() {
        let response = Node::from_xml(USER_INFO).unwrap();
        let notebooks = user_notebooks(&response);

        assert_eq!(notebooks.len(), 3);
        assert_eq!(notebooks[1].name, "Lab Notes");
        assert!(notebooks[1].is_default);
        assert!(!notebooks[0].is_default);
    }

    #[test]
    fn test_user_access() {
        let response = Node::from_xml(USER_INFO).unwrap();
        let user = UserAccess::from_response(&response).unwrap();

        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
        assert_eq!(user.fullname.as_deref(), Some("Jane Doe"));
    }
}
