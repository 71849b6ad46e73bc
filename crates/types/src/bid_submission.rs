use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::{
    BlobsBundleV1, BlsPublicKeyBytes, BlsSignatureBytes, ExecutionPayloadV1, ExecutionPayloadV2,
    ExecutionPayloadV3,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BidTrace {
    /// The slot associated with the block.
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    /// The parent hash of the block.
    pub parent_hash: B256,
    /// The hash of the block.
    pub block_hash: B256,
    /// The public key of the builder.
    pub builder_pubkey: BlsPublicKeyBytes,
    /// The public key of the proposer.
    pub proposer_pubkey: BlsPublicKeyBytes,
    /// The recipient of the proposer's fee.
    pub proposer_fee_recipient: Address,
    /// The gas limit associated with the block.
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    /// The gas used within the block.
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_used: u64,
    /// The value associated with the block.
    #[serde(with = "serde_utils::quoted_u256")]
    pub value: U256,
}

// The envelopes below are the standard builder-api submission bodies. They do not deny unknown
// fields: validation requests append out-of-band siblings to the same JSON object.
// `execution_payload` is optional so that a missing payload surfaces as a validation error
// rather than a generic decoding failure.

/// Bellatrix block submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBlockRequest {
    pub message: BidTrace,
    #[serde(default)]
    pub execution_payload: Option<ExecutionPayloadV1>,
    pub signature: BlsSignatureBytes,
}

/// Capella block submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBlockRequestV2 {
    pub message: BidTrace,
    #[serde(default)]
    pub execution_payload: Option<ExecutionPayloadV2>,
    pub signature: BlsSignatureBytes,
}

/// Deneb block submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBlockRequestV3 {
    pub message: BidTrace,
    #[serde(default)]
    pub execution_payload: Option<ExecutionPayloadV3>,
    #[serde(default)]
    pub blobs_bundle: Option<BlobsBundleV1>,
    pub signature: BlsSignatureBytes,
}
