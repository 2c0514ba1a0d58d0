/*
[INPUT]:  Caller key material and raw XML responses
[OUTPUT]: Credentials, routing enums, decoded response trees and helpers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API shapes change or new types added
*/

pub mod credential;
pub mod enums;
pub mod node;
pub mod notebook;

pub use credential::*;
pub use enums::*;
pub use node::{DecodeError, Node, decode};
pub use notebook::*;
