use aegis_types::BlobsBundleV1;
use alloy_eips::eip4844::{env_settings::EnvKzgSettings, BlobTransactionSidecar};
use alloy_primitives::B256;
use tracing::debug;

use crate::{block::ExecutionBlock, error::BlobsError};

/// Checks that `bundle` carries exactly the blobs referenced by the block's transactions, in
/// order, and that every KZG proof verifies.
pub fn validate_blobs_bundle(
    block: &ExecutionBlock,
    bundle: &BlobsBundleV1,
    kzg_settings: &EnvKzgSettings,
) -> Result<(), BlobsError> {
    let hashes = block.blob_versioned_hashes();

    if bundle.blobs.len() != hashes.len() {
        return Err(BlobsError::BlobCount { blobs: bundle.blobs.len(), hashes: hashes.len() });
    }
    if bundle.commitments.len() != hashes.len() {
        return Err(BlobsError::CommitmentCount {
            commitments: bundle.commitments.len(),
            hashes: hashes.len(),
        });
    }
    if bundle.proofs.len() != hashes.len() {
        return Err(BlobsError::ProofCount { proofs: bundle.proofs.len(), hashes: hashes.len() });
    }

    let sidecar = BlobTransactionSidecar::new(
        bundle.blobs.iter().map(|blob| **blob).collect(),
        bundle.commitments.clone(),
        bundle.proofs.clone(),
    );
    if let Err(err) = sidecar.validate(&hashes, kzg_settings.get()) {
        return Err(first_invalid_blob(&sidecar, &hashes, kzg_settings)
            .unwrap_or_else(|| BlobsError::InvalidBundle { reason: err.to_string() }));
    }

    debug!(block_hash = %block.hash(), blobs = hashes.len(), "verified blobs bundle");
    Ok(())
}

/// Rechecks blobs one at a time to find the one that failed batch verification.
fn first_invalid_blob(
    sidecar: &BlobTransactionSidecar,
    hashes: &[B256],
    kzg_settings: &EnvKzgSettings,
) -> Option<BlobsError> {
    (0..hashes.len()).find_map(|index| {
        let single = BlobTransactionSidecar::new(
            vec![sidecar.blobs[index]],
            vec![sidecar.commitments[index]],
            vec![sidecar.proofs[index]],
        );
        single
            .validate(&hashes[index..=index], kzg_settings.get())
            .err()
            .map(|err| BlobsError::InvalidBlob { index, reason: err.to_string() })
    })
}
