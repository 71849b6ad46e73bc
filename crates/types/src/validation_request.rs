use alloy_primitives::B256;
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{SubmitBlockRequest, SubmitBlockRequestV2, SubmitBlockRequestV3};

/// Request body of `flashbots_validateBuilderSubmissionV1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderBlockValidationRequest {
    #[serde(flatten)]
    pub request: SubmitBlockRequest,
    #[serde(with = "serde_utils::quoted_u64")]
    pub registered_gas_limit: u64,
}

/// Request body of `flashbots_validateBuilderSubmissionV2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderBlockValidationRequestV2 {
    #[serde(flatten)]
    pub request: SubmitBlockRequestV2,
    #[serde(with = "serde_utils::quoted_u64")]
    pub registered_gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawals_root: Option<B256>,
}

/// Request body of `flashbots_validateBuilderSubmissionV3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderBlockValidationRequestV3 {
    #[serde(flatten)]
    pub request: SubmitBlockRequestV3,
    #[serde(with = "serde_utils::quoted_u64")]
    pub registered_gas_limit: u64,
    pub parent_beacon_block_root: B256,
}

/// Fields appended next to the capella envelope.
#[derive(Debug, Deserialize)]
struct ValidationFieldsV2 {
    #[serde(with = "serde_utils::quoted_u64")]
    registered_gas_limit: u64,
    #[serde(default)]
    withdrawals_root: Option<B256>,
}

/// Fields appended next to the deneb envelope.
#[derive(Debug, Deserialize)]
struct ValidationFieldsV3 {
    #[serde(with = "serde_utils::quoted_u64")]
    registered_gas_limit: u64,
    parent_beacon_block_root: B256,
}

/// Decodes the same JSON object twice: first the out-of-band fields `F`, then the standard
/// envelope `E`. Neither pass sees the other's fields as errors.
fn decode_two_pass<F, E>(value: Value) -> Result<(F, E), serde_json::Error>
where
    F: DeserializeOwned,
    E: DeserializeOwned,
{
    let fields = F::deserialize(&value)?;
    let envelope = E::deserialize(value)?;
    Ok((fields, envelope))
}

impl BuilderBlockValidationRequestV2 {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let (fields, request) =
            decode_two_pass::<ValidationFieldsV2, SubmitBlockRequestV2>(value)?;
        Ok(Self {
            request,
            registered_gas_limit: fields.registered_gas_limit,
            withdrawals_root: fields.withdrawals_root,
        })
    }
}

impl BuilderBlockValidationRequestV3 {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let (fields, request) =
            decode_two_pass::<ValidationFieldsV3, SubmitBlockRequestV3>(value)?;
        Ok(Self {
            request,
            registered_gas_limit: fields.registered_gas_limit,
            parent_beacon_block_root: fields.parent_beacon_block_root,
        })
    }
}

impl<'de> Deserialize<'de> for BuilderBlockValidationRequestV2 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for BuilderBlockValidationRequestV3 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}
