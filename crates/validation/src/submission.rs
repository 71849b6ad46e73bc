use std::fmt;

use aegis_types::{
    BidTrace, BlobsBundleV1, BlsPublicKeyBytes, BlsSignatureBytes, BuilderBlockValidationRequest,
    BuilderBlockValidationRequestV2, BuilderBlockValidationRequestV3, ExecutionPayloadV1,
    ExecutionPayloadV2, ExecutionPayloadV3,
};
use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, ValidationError};

/// Protocol version of a builder submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PayloadVersion {
    /// Bellatrix, no withdrawals or blobs.
    V1,
    /// Capella, adds withdrawals.
    V2,
    /// Deneb, adds blobs.
    V3,
}

impl fmt::Display for PayloadVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadVersion::V1 => write!(f, "V1"),
            PayloadVersion::V2 => write!(f, "V2"),
            PayloadVersion::V3 => write!(f, "V3"),
        }
    }
}

/// Execution payload together with the data only some versions carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionedPayload {
    V1(ExecutionPayloadV1),
    V2(ExecutionPayloadV2),
    V3 {
        execution_payload: ExecutionPayloadV3,
        blobs_bundle: BlobsBundleV1,
        parent_beacon_block_root: B256,
    },
}

impl VersionedPayload {
    pub fn version(&self) -> PayloadVersion {
        match self {
            VersionedPayload::V1(_) => PayloadVersion::V1,
            VersionedPayload::V2(_) => PayloadVersion::V2,
            VersionedPayload::V3 { .. } => PayloadVersion::V3,
        }
    }

    /// Header fields and transactions shared by every version.
    pub fn as_v1(&self) -> &ExecutionPayloadV1 {
        match self {
            VersionedPayload::V1(payload) => payload,
            VersionedPayload::V2(payload) => payload.as_v1(),
            VersionedPayload::V3 { execution_payload, .. } => execution_payload.as_v1(),
        }
    }

    pub fn blobs_bundle(&self) -> Option<&BlobsBundleV1> {
        match self {
            VersionedPayload::V3 { blobs_bundle, .. } => Some(blobs_bundle),
            _ => None,
        }
    }

    pub fn parent_beacon_block_root(&self) -> Option<B256> {
        match self {
            VersionedPayload::V3 { parent_beacon_block_root, .. } => {
                Some(*parent_beacon_block_root)
            }
            _ => None,
        }
    }
}

/// A decoded builder submission, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: BidTrace,
    pub payload: VersionedPayload,
    pub signature: BlsSignatureBytes,
    pub registered_gas_limit: u64,
    /// Carried through from V2 requests, never checked.
    pub withdrawals_root: Option<B256>,
}

impl Submission {
    pub fn version(&self) -> PayloadVersion {
        self.payload.version()
    }

    /// Only bellatrix submissions forward the builder key to the chain validator.
    pub fn payment_builder_pubkey(&self) -> Option<&BlsPublicKeyBytes> {
        match self.payload {
            VersionedPayload::V1(_) => Some(&self.message.builder_pubkey),
            VersionedPayload::V2(_) | VersionedPayload::V3 { .. } => None,
        }
    }
}

impl TryFrom<BuilderBlockValidationRequest> for Submission {
    type Error = DecodeError;

    fn try_from(value: BuilderBlockValidationRequest) -> Result<Self, Self::Error> {
        let request = value.request;
        let payload = request.execution_payload.ok_or(DecodeError::NilExecutionPayload)?;

        Ok(Self {
            message: request.message,
            payload: VersionedPayload::V1(payload),
            signature: request.signature,
            registered_gas_limit: value.registered_gas_limit,
            withdrawals_root: None,
        })
    }
}

impl TryFrom<BuilderBlockValidationRequestV2> for Submission {
    type Error = DecodeError;

    fn try_from(value: BuilderBlockValidationRequestV2) -> Result<Self, Self::Error> {
        let request = value.request;
        let payload = request.execution_payload.ok_or(DecodeError::NilExecutionPayload)?;

        Ok(Self {
            message: request.message,
            payload: VersionedPayload::V2(payload),
            signature: request.signature,
            registered_gas_limit: value.registered_gas_limit,
            withdrawals_root: value.withdrawals_root,
        })
    }
}

impl TryFrom<BuilderBlockValidationRequestV3> for Submission {
    type Error = DecodeError;

    fn try_from(value: BuilderBlockValidationRequestV3) -> Result<Self, Self::Error> {
        let request = value.request;
        let execution_payload =
            request.execution_payload.ok_or(DecodeError::NilExecutionPayload)?;
        let blobs_bundle = request.blobs_bundle.ok_or(DecodeError::NilBlobsBundle)?;

        Ok(Self {
            message: request.message,
            payload: VersionedPayload::V3 {
                execution_payload,
                blobs_bundle,
                parent_beacon_block_root: value.parent_beacon_block_root,
            },
            signature: request.signature,
            registered_gas_limit: value.registered_gas_limit,
            withdrawals_root: None,
        })
    }
}

/// Decodes a raw validation request of the given version.
pub fn decode_submission(
    version: PayloadVersion,
    data: &[u8],
) -> Result<Submission, ValidationError> {
    Ok(decode(version, data)?)
}

fn decode(version: PayloadVersion, data: &[u8]) -> Result<Submission, DecodeError> {
    match version {
        PayloadVersion::V1 => {
            serde_json::from_slice::<BuilderBlockValidationRequest>(data)?.try_into()
        }
        PayloadVersion::V2 => {
            let value: Value = serde_json::from_slice(data)?;
            BuilderBlockValidationRequestV2::from_value(value)?.try_into()
        }
        PayloadVersion::V3 => {
            let value: Value = serde_json::from_slice(data)?;
            BuilderBlockValidationRequestV3::from_value(value)?.try_into()
        }
    }
}
