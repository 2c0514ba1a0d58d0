/*
[INPUT]:  HTTP client configuration, credential and API parameters
[OUTPUT]: Decoded XML responses and tagged errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod entries;
pub mod error;
pub mod notebooks;
pub mod query;
pub mod tree_tools;
pub mod users;
pub mod utilities;

pub use error::{LabArchivesError, Result};
pub use query::{QueryBuilder, encode_component};
pub use tree_tools::ROOT_TREE_ID;

pub use client::{ClientConfig, LabArchivesClient};
