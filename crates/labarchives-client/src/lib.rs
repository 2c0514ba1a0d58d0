/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public LabArchives client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{CallSigner, Clock, FixedClock, Signature, SystemClock};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    LabArchivesClient,
    LabArchivesError,
    QueryBuilder,
    ROOT_TREE_ID,
    Result,
};

// Re-export all types
pub use types::*;
