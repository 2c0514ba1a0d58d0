/*
[INPUT]:  Caller credential and current time
[OUTPUT]: Time-bound call signatures
[POS]:    Auth layer - handles LabArchives API call authentication
[UPDATE]: When signature method or time source changes
*/

pub mod clock;
pub mod signer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use signer::{CallSigner, Signature, hmac_sha1_base64};
