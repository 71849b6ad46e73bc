mod bid_submission;
mod blobs;
mod execution_payload;
mod fields;
mod validation_request;

pub use bid_submission::*;
pub use blobs::*;
pub use execution_payload::*;
pub use fields::*;
pub use validation_request::*;
