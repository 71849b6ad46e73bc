mod api;
mod blobs;
mod block;
mod chain;
mod config;
mod consistency;
mod error;
#[cfg(test)]
mod mock_chain_validator;
mod rpc;
mod submission;
#[cfg(test)]
mod test_utils;
mod utils;

pub use api::{check_submission, BlockValidationApi};
pub use blobs::validate_blobs_bundle;
pub use block::{payload_to_block, ExecutionBlock};
pub use chain::{ChainValidator, ExecutionConfig, ProfitMode};
pub use config::{
    AegisConfig, BlockValidationArgs, BlockValidationConfig, ConfigError, LoggingConfig,
};
pub use consistency::validate_message_against_block;
pub use error::{
    BlobsError, ChainValidationError, ConsistencyError, ConversionError, DecodeError,
    PayloadError, ValidationError,
};
pub use rpc::{register, BlockSubmissionValidationApiServer, VALIDATION_ERROR_CODE};
pub use submission::{decode_submission, PayloadVersion, Submission, VersionedPayload};
pub use utils::{init_tracing, LoggingInitError};

pub use alloy_eips::eip4844::env_settings::EnvKzgSettings;
