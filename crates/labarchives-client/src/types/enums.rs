/*
[INPUT]:  LabArchives API routing table
[OUTPUT]: Typed API categories and method names
[POS]:    Data layer - routing identifiers shared by signer and client
[UPDATE]: When the service adds endpoints
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path segment grouping related API methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiCategory {
    Utilities,
    Users,
    Notebooks,
    TreeTools,
    Entries,
}

impl ApiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiCategory::Utilities => "utilities",
            ApiCategory::Users => "users",
            ApiCategory::Notebooks => "notebooks",
            ApiCategory::TreeTools => "tree_tools",
            ApiCategory::Entries => "entries",
        }
    }
}

impl fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote API method; its name is also part of the signature salt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiMethod {
    InstitutionalLoginUrls,
    UserAccessInfo,
    UserInfoViaId,
    EmailHasAccount,
    CreateUserAccount,
    NotebookInfo,
    CreateNotebook,
    AddUserToNotebook,
    GetTreeLevel,
    InsertNode,
    AddEntry,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMethod::InstitutionalLoginUrls => "institutional_login_urls",
            ApiMethod::UserAccessInfo => "user_access_info",
            ApiMethod::UserInfoViaId => "user_info_via_id",
            ApiMethod::EmailHasAccount => "email_has_account",
            ApiMethod::CreateUserAccount => "create_user_account",
            ApiMethod::NotebookInfo => "notebook_info",
            ApiMethod::CreateNotebook => "create_notebook",
            ApiMethod::AddUserToNotebook => "add_user_to_notebook",
            ApiMethod::GetTreeLevel => "get_tree_level",
            ApiMethod::InsertNode => "insert_node",
            ApiMethod::AddEntry => "add_entry",
        }
    }

    pub fn category(&self) -> ApiCategory {
        match self {
            ApiMethod::InstitutionalLoginUrls => ApiCategory::Utilities,
            ApiMethod::UserAccessInfo
            | ApiMethod::UserInfoViaId
            | ApiMethod::EmailHasAccount
            | ApiMethod::CreateUserAccount => ApiCategory::Users,
            ApiMethod::NotebookInfo
            | ApiMethod::CreateNotebook
            | ApiMethod::AddUserToNotebook => ApiCategory::Notebooks,
            ApiMethod::GetTreeLevel | ApiMethod::InsertNode => ApiCategory::TreeTools,
            ApiMethod::AddEntry => ApiCategory::Entries,
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_wire_names() {
        let method = serde_json::to_string(&ApiMethod::UserAccessInfo).unwrap();
        assert_eq!(method, format!("\"{}\"", ApiMethod::UserAccessInfo.as_str()));

        let category = serde_json::to_string(&ApiCategory::TreeTools).unwrap();
        assert_eq!(category, "\"tree_tools\"");
    }

    #[test]
    fn test_routing() {
        assert_eq!(ApiMethod::GetTreeLevel.category(), ApiCategory::TreeTools);
        assert_eq!(ApiMethod::AddEntry.category(), ApiCategory::Entries);
        assert_eq!(ApiMethod::InstitutionalLoginUrls.category(), ApiCategory::Utilities);
        assert_eq!(ApiMethod::CreateUserAccount.as_str(), "create_user_account");
    }
}
