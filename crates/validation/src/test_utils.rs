use std::sync::Arc;

use aegis_types::{
    BidTrace, BlobsBundleV1, BlsPublicKeyBytes, BlsSignatureBytes, BuilderBlockValidationRequest,
    BuilderBlockValidationRequestV2, BuilderBlockValidationRequestV3, ExecutionPayloadV1,
    ExecutionPayloadV2, ExecutionPayloadV3, SubmitBlockRequest, SubmitBlockRequestV2,
    SubmitBlockRequestV3, Withdrawal,
};
use alloy_consensus::{
    SidecarBuilder, SignableTransaction, SimpleCoder, TxEip4844, TxEnvelope, TxLegacy,
};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, Bytes, PrimitiveSignature, B256, U256};

use crate::{
    block::{payload_to_block, unsealed_block, ExecutionBlock},
    submission::{Submission, VersionedPayload},
};

const DATA_GAS_PER_BLOB: u64 = 131_072;

fn test_signature() -> PrimitiveSignature {
    PrimitiveSignature::new(U256::from(1), U256::from(2), false)
}

pub fn legacy_tx(nonce: u64) -> Bytes {
    let tx = TxLegacy {
        chain_id: Some(1),
        nonce,
        gas_price: 10,
        gas_limit: 21_000,
        to: Address::repeat_byte(0x09).into(),
        value: U256::from(1),
        ..Default::default()
    };
    TxEnvelope::from(tx.into_signed(test_signature())).encoded_2718().into()
}

pub fn blob_tx(nonce: u64, blob_versioned_hashes: Vec<B256>) -> Bytes {
    let tx = TxEip4844 {
        chain_id: 1,
        nonce,
        gas_limit: 21_000,
        max_fee_per_gas: 10,
        max_priority_fee_per_gas: 1,
        to: Address::repeat_byte(0x09),
        max_fee_per_blob_gas: 1,
        blob_versioned_hashes,
        ..Default::default()
    };
    TxEnvelope::from(tx.into_signed(test_signature())).encoded_2718().into()
}

/// Payload with the given transactions. The block hash is left empty, see [`seal_payload`].
pub fn test_payload_v1(transactions: Vec<Bytes>) -> ExecutionPayloadV1 {
    ExecutionPayloadV1 {
        parent_hash: B256::repeat_byte(0x11),
        fee_recipient: Address::repeat_byte(0x78),
        state_root: B256::repeat_byte(0x55),
        receipts_root: B256::repeat_byte(0x66),
        prev_randao: B256::repeat_byte(0x77),
        block_number: 1,
        gas_limit: 30_000_000,
        gas_used: 21_000,
        timestamp: 1_700_000_000,
        base_fee_per_gas: U256::from(7),
        transactions,
        ..Default::default()
    }
}

/// Sets the payload's block hash to the hash of the header it describes.
pub fn seal_payload(payload: &mut VersionedPayload) {
    let hash = unsealed_block(payload).unwrap().header.hash_slow();
    match payload {
        VersionedPayload::V1(payload) => payload.block_hash = hash,
        VersionedPayload::V2(payload) => payload.payload_inner.block_hash = hash,
        VersionedPayload::V3 { execution_payload, .. } => {
            execution_payload.payload_inner.payload_inner.block_hash = hash
        }
    }
}

/// `count` blobs with valid commitments and proofs, and their versioned hashes.
pub fn test_sidecar(count: usize) -> (BlobsBundleV1, Vec<B256>) {
    let mut bundle = BlobsBundleV1::with_capacity(count);
    let mut hashes = Vec::with_capacity(count);

    for i in 0..count {
        let data = vec![i as u8 + 1; 64];
        let sidecar = SidecarBuilder::<SimpleCoder>::from_slice(&data).build().unwrap();
        hashes.extend(sidecar.versioned_hashes());
        for ((blob, commitment), proof) in
            sidecar.blobs.iter().zip(&sidecar.commitments).zip(&sidecar.proofs)
        {
            bundle.push(Arc::new(*blob), *commitment, *proof);
        }
    }

    (bundle, hashes)
}

fn v3_payload(
    transactions: Vec<Bytes>,
    blob_count: usize,
    blobs_bundle: BlobsBundleV1,
) -> VersionedPayload {
    VersionedPayload::V3 {
        execution_payload: ExecutionPayloadV3 {
            payload_inner: ExecutionPayloadV2 {
                payload_inner: test_payload_v1(transactions),
                withdrawals: vec![],
            },
            blob_gas_used: blob_count as u64 * DATA_GAS_PER_BLOB,
            excess_blob_gas: 0,
        },
        blobs_bundle,
        parent_beacon_block_root: B256::repeat_byte(0x33),
    }
}

/// Sealed deneb block with one blob transaction per entry of `blob_hashes`.
pub fn blob_block(blob_hashes: Vec<Vec<B256>>) -> ExecutionBlock {
    let blob_count = blob_hashes.iter().map(Vec::len).sum();
    let transactions = blob_hashes
        .into_iter()
        .enumerate()
        .map(|(nonce, hashes)| blob_tx(nonce as u64, hashes))
        .collect();

    let mut payload = v3_payload(transactions, blob_count, BlobsBundleV1::default());
    seal_payload(&mut payload);
    payload_to_block(&payload).unwrap()
}

pub fn sealed_v1_block() -> ExecutionBlock {
    let mut payload = VersionedPayload::V1(test_payload_v1(vec![legacy_tx(0)]));
    seal_payload(&mut payload);
    payload_to_block(&payload).unwrap()
}

/// Bid trace that agrees with `block` on every checked field.
pub fn matching_trace(block: &ExecutionBlock) -> BidTrace {
    BidTrace {
        slot: 1,
        parent_hash: block.parent_hash(),
        block_hash: block.hash(),
        builder_pubkey: BlsPublicKeyBytes::repeat_byte(0x12),
        proposer_pubkey: BlsPublicKeyBytes::repeat_byte(0x34),
        proposer_fee_recipient: Address::repeat_byte(0x56),
        gas_limit: block.gas_limit(),
        gas_used: block.gas_used(),
        value: U256::from(1_000_000_000_000_000_000u128),
    }
}

/// Seals `payload` and wraps it in a submission whose trace matches.
pub fn submission(mut payload: VersionedPayload) -> Submission {
    seal_payload(&mut payload);
    let block = payload_to_block(&payload).unwrap();
    let withdrawals_root = match payload {
        VersionedPayload::V2(_) => block.header().withdrawals_root,
        _ => None,
    };

    Submission {
        message: matching_trace(&block),
        payload,
        signature: BlsSignatureBytes::repeat_byte(0x99),
        registered_gas_limit: 30_000_000,
        withdrawals_root,
    }
}

pub fn v1_submission() -> Submission {
    submission(VersionedPayload::V1(test_payload_v1(vec![legacy_tx(0), legacy_tx(1)])))
}

pub fn v2_submission() -> Submission {
    let withdrawals = vec![
        Withdrawal { index: 1, validator_index: 10, address: Address::repeat_byte(1), amount: 1 },
        Withdrawal { index: 2, validator_index: 20, address: Address::repeat_byte(2), amount: 2 },
    ];
    submission(VersionedPayload::V2(ExecutionPayloadV2 {
        payload_inner: test_payload_v1(vec![legacy_tx(0)]),
        withdrawals,
    }))
}

/// Deneb submission whose single blob transaction references `blob_count` valid blobs.
pub fn v3_submission(blob_count: usize) -> Submission {
    let (bundle, hashes) = test_sidecar(blob_count);
    let mut transactions = vec![legacy_tx(0)];
    if blob_count > 0 {
        transactions.push(blob_tx(1, hashes));
    }
    submission(v3_payload(transactions, blob_count, bundle))
}

/// JSON body of the validation request carrying `submission`.
pub fn request_json(submission: &Submission) -> Vec<u8> {
    let message = submission.message.clone();
    let signature = submission.signature;
    let registered_gas_limit = submission.registered_gas_limit;

    match submission.payload.clone() {
        VersionedPayload::V1(execution_payload) => {
            serde_json::to_vec(&BuilderBlockValidationRequest {
                request: SubmitBlockRequest {
                    message,
                    execution_payload: Some(execution_payload),
                    signature,
                },
                registered_gas_limit,
            })
        }
        VersionedPayload::V2(execution_payload) => {
            serde_json::to_vec(&BuilderBlockValidationRequestV2 {
                request: SubmitBlockRequestV2 {
                    message,
                    execution_payload: Some(execution_payload),
                    signature,
                },
                registered_gas_limit,
                withdrawals_root: submission.withdrawals_root,
            })
        }
        VersionedPayload::V3 { execution_payload, blobs_bundle, parent_beacon_block_root } => {
            serde_json::to_vec(&BuilderBlockValidationRequestV3 {
                request: SubmitBlockRequestV3 {
                    message,
                    execution_payload: Some(execution_payload),
                    blobs_bundle: Some(blobs_bundle),
                    signature,
                },
                registered_gas_limit,
                parent_beacon_block_root,
            })
        }
    }
    .unwrap()
}
