use alloy_primitives::{B256, U256};
use alloy_rpc_types_engine::PayloadError as EnginePayloadError;

use crate::submission::PayloadVersion;

/// Every way a submission can be rejected. Messages are forwarded to callers unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
    #[error(transparent)]
    Blobs(#[from] BlobsError),
    #[error(transparent)]
    Payment(#[from] ChainValidationError),
}

impl ValidationError {
    /// Name of the pipeline stage that produced the error.
    pub fn stage(&self) -> &'static str {
        match self {
            ValidationError::Decode(_) => "decode",
            ValidationError::Conversion(_) => "reconstruct",
            ValidationError::Consistency(_) => "consistency",
            ValidationError::Blobs(_) => "blobs",
            ValidationError::Payment(_) => "payment",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("nil execution payload")]
    NilExecutionPayload,
    #[error("nil blobs bundle")]
    NilBlobsBundle,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The payload could not be turned into a block.
#[derive(Debug, thiserror::Error)]
#[error("invalid {version} execution payload: {reason}")]
pub struct ConversionError {
    pub version: PayloadVersion,
    #[source]
    pub reason: PayloadError,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The transaction at `index` is not a single, fully consumed EIP-2718 envelope.
    #[error("invalid transaction {index}: {source}")]
    InvalidTransaction {
        index: usize,
        #[source]
        source: EnginePayloadError,
    },
    #[error("invalid extradata length: {0}")]
    ExtraDataTooLong(usize),
    #[error("invalid base fee per gas: {0} overflows u64")]
    BaseFeeOverflow(U256),
    #[error("blockhash mismatch, want {want}, got {got}")]
    BlockHashMismatch { want: B256, got: B256 },
    #[error(transparent)]
    Malformed(EnginePayloadError),
}

/// Bid trace and block disagree. `got` is the block's value, `expected` the trace's.
#[derive(Debug, thiserror::Error)]
pub enum ConsistencyError {
    #[error("incorrect ParentHash {got}, expected {expected}")]
    ParentHash { got: B256, expected: B256 },
    #[error("incorrect BlockHash {got}, expected {expected}")]
    BlockHash { got: B256, expected: B256 },
    #[error("incorrect GasLimit {got}, expected {expected}")]
    GasLimit { got: u64, expected: u64 },
    #[error("incorrect GasUsed {got}, expected {expected}")]
    GasUsed { got: u64, expected: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum BlobsError {
    #[error("invalid number of {blobs} blobs compared to {hashes} blob hashes")]
    BlobCount { blobs: usize, hashes: usize },
    #[error("invalid number of {commitments} blob commitments compared to {hashes} blob hashes")]
    CommitmentCount { commitments: usize, hashes: usize },
    #[error("invalid number of {proofs} blob proofs compared to {hashes} blob hashes")]
    ProofCount { proofs: usize, hashes: usize },
    #[error("invalid blob {index}: {reason}")]
    InvalidBlob { index: usize, reason: String },
    /// Batch verification failed but no single blob could be blamed.
    #[error("invalid blobs bundle: {reason}")]
    InvalidBundle { reason: String },
}

/// Opaque rejection raised by a [`crate::ChainValidator`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ChainValidationError(Box<dyn std::error::Error + Send + Sync>);

impl ChainValidationError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}
