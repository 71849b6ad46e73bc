use aegis_types::Transaction as RawTransaction;
use alloy_consensus::{Block, Header, Transaction, TxEnvelope};
use alloy_eips::{eip2718::Decodable2718, eip4844::kzg_to_versioned_hash, eip4895::Withdrawal};
use alloy_primitives::{Address, B256};
use alloy_rpc_types_engine::{
    CancunPayloadFields, ExecutionPayload, ExecutionPayloadSidecar,
    PayloadError as EnginePayloadError,
};

use crate::{
    error::{ConversionError, PayloadError},
    submission::VersionedPayload,
};

/// A block rebuilt from an execution payload and sealed with the hash computed from its header.
#[derive(Debug, Clone)]
pub struct ExecutionBlock {
    block: Block<TxEnvelope>,
    hash: B256,
}

impl ExecutionBlock {
    pub fn header(&self) -> &Header {
        &self.block.header
    }

    pub fn hash(&self) -> B256 {
        self.hash
    }

    pub fn parent_hash(&self) -> B256 {
        self.block.header.parent_hash
    }

    pub fn number(&self) -> u64 {
        self.block.header.number
    }

    pub fn gas_limit(&self) -> u64 {
        self.block.header.gas_limit
    }

    pub fn gas_used(&self) -> u64 {
        self.block.header.gas_used
    }

    pub fn beneficiary(&self) -> Address {
        self.block.header.beneficiary
    }

    pub fn transactions(&self) -> &[TxEnvelope] {
        &self.block.body.transactions
    }

    pub fn withdrawals(&self) -> Option<&[Withdrawal]> {
        self.block.body.withdrawals.as_ref().map(|withdrawals| withdrawals.as_slice())
    }

    /// Versioned hashes of every blob referenced by the block, in transaction order.
    pub fn blob_versioned_hashes(&self) -> Vec<B256> {
        self.transactions()
            .iter()
            .filter_map(|tx| tx.blob_versioned_hashes())
            .flatten()
            .copied()
            .collect()
    }
}

/// Reconstructs the block described by `payload` and checks that its hash matches the one the
/// payload claims.
pub fn payload_to_block(payload: &VersionedPayload) -> Result<ExecutionBlock, ConversionError> {
    seal(payload).map_err(|reason| ConversionError { version: payload.version(), reason })
}

fn seal(payload: &VersionedPayload) -> Result<ExecutionBlock, PayloadError> {
    let block = unsealed_block(payload)?;

    let hash = block.header.hash_slow();
    let want = payload.as_v1().block_hash;
    if hash != want {
        return Err(PayloadError::BlockHashMismatch { want, got: hash });
    }

    Ok(ExecutionBlock { block, hash })
}

/// Builds the block a payload describes without checking the claimed block hash.
pub(crate) fn unsealed_block(
    payload: &VersionedPayload,
) -> Result<Block<TxEnvelope>, PayloadError> {
    let (execution_payload, sidecar) = engine_payload(payload);
    execution_payload
        .try_into_block_with_sidecar(&sidecar)
        .map_err(|err| payload_error(err, &payload.as_v1().transactions))
}

/// Engine API view of the payload. Deneb fields not carried by the payload itself go in the
/// sidecar.
fn engine_payload(payload: &VersionedPayload) -> (ExecutionPayload, ExecutionPayloadSidecar) {
    match payload {
        VersionedPayload::V1(payload) => {
            (ExecutionPayload::V1(payload.into()), ExecutionPayloadSidecar::none())
        }
        VersionedPayload::V2(payload) => {
            (ExecutionPayload::V2(payload.into()), ExecutionPayloadSidecar::none())
        }
        VersionedPayload::V3 { execution_payload, blobs_bundle, parent_beacon_block_root } => {
            let versioned_hashes = blobs_bundle
                .commitments
                .iter()
                .map(|commitment| kzg_to_versioned_hash(commitment.as_slice()))
                .collect();
            let cancun = CancunPayloadFields::new(*parent_beacon_block_root, versioned_hashes);
            (ExecutionPayload::V3(execution_payload.into()), ExecutionPayloadSidecar::v3(cancun))
        }
    }
}

fn payload_error(err: EnginePayloadError, transactions: &[RawTransaction]) -> PayloadError {
    match err {
        EnginePayloadError::ExtraData(extra_data) => {
            PayloadError::ExtraDataTooLong(extra_data.len())
        }
        EnginePayloadError::BaseFee(base_fee) => PayloadError::BaseFeeOverflow(base_fee),
        EnginePayloadError::Decode(_) => match first_undecodable(transactions) {
            Some(index) => PayloadError::InvalidTransaction { index, source: err },
            None => PayloadError::Malformed(err),
        },
        err => PayloadError::Malformed(err),
    }
}

/// Index of the first entry that is not a single, fully consumed EIP-2718 envelope. Only used
/// once conversion has already failed, to say which transaction was at fault.
fn first_undecodable(transactions: &[RawTransaction]) -> Option<usize> {
    transactions.iter().position(|raw| {
        let mut buf = raw.as_ref();
        TxEnvelope::decode_2718(&mut buf).is_err() || !buf.is_empty()
    })
}
