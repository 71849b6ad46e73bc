use alloy_primitives::{Address, Bloom, B256, U256};
use alloy_rpc_types_engine as engine;
use serde::{Deserialize, Serialize};

use crate::fields::{ExtraData, Transactions};

/// Bellatrix execution payload, as submitted by builders.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ExecutionPayloadV1 {
    pub parent_hash: B256,
    pub fee_recipient: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bloom,
    pub prev_randao: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub block_number: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    pub extra_data: ExtraData,
    #[serde(with = "serde_utils::quoted_u256")]
    pub base_fee_per_gas: U256,
    pub block_hash: B256,
    pub transactions: Transactions,
}

/// Capella execution payload, adds withdrawals.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ExecutionPayloadV2 {
    #[serde(flatten)]
    pub payload_inner: ExecutionPayloadV1,
    pub withdrawals: Vec<Withdrawal>,
}

/// Deneb execution payload, adds blob gas accounting.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ExecutionPayloadV3 {
    #[serde(flatten)]
    pub payload_inner: ExecutionPayloadV2,
    #[serde(with = "serde_utils::quoted_u64")]
    pub blob_gas_used: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub excess_blob_gas: u64,
}

impl ExecutionPayloadV2 {
    pub fn as_v1(&self) -> &ExecutionPayloadV1 {
        &self.payload_inner
    }
}

impl ExecutionPayloadV3 {
    pub fn as_v1(&self) -> &ExecutionPayloadV1 {
        &self.payload_inner.payload_inner
    }

    pub fn as_v2(&self) -> &ExecutionPayloadV2 {
        &self.payload_inner
    }
}

/// Beacon chain withdrawal, amounts are denominated in gwei.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Withdrawal {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub validator_index: u64,
    pub address: Address,
    #[serde(with = "serde_utils::quoted_u64")]
    pub amount: u64,
}

impl From<Withdrawal> for alloy_eips::eip4895::Withdrawal {
    fn from(value: Withdrawal) -> Self {
        Self {
            index: value.index,
            validator_index: value.validator_index,
            address: value.address,
            amount: value.amount,
        }
    }
}

impl From<&Withdrawal> for alloy_eips::eip4895::Withdrawal {
    fn from(value: &Withdrawal) -> Self {
        (*value).into()
    }
}

impl From<&ExecutionPayloadV1> for engine::ExecutionPayloadV1 {
    fn from(value: &ExecutionPayloadV1) -> Self {
        Self {
            parent_hash: value.parent_hash,
            fee_recipient: value.fee_recipient,
            state_root: value.state_root,
            receipts_root: value.receipts_root,
            logs_bloom: value.logs_bloom,
            prev_randao: value.prev_randao,
            block_number: value.block_number,
            gas_limit: value.gas_limit,
            gas_used: value.gas_used,
            timestamp: value.timestamp,
            extra_data: value.extra_data.clone(),
            base_fee_per_gas: value.base_fee_per_gas,
            block_hash: value.block_hash,
            transactions: value.transactions.clone(),
        }
    }
}

impl From<&ExecutionPayloadV2> for engine::ExecutionPayloadV2 {
    fn from(value: &ExecutionPayloadV2) -> Self {
        Self {
            payload_inner: value.as_v1().into(),
            withdrawals: value.withdrawals.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ExecutionPayloadV3> for engine::ExecutionPayloadV3 {
    fn from(value: &ExecutionPayloadV3) -> Self {
        Self {
            payload_inner: value.as_v2().into(),
            blob_gas_used: value.blob_gas_used,
            excess_blob_gas: value.excess_blob_gas,
        }
    }
}
