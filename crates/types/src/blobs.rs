use serde::{Deserialize, Serialize};

use crate::fields::{Blob, Blobs, KzgCommitment, KzgCommitments, KzgProof, KzgProofs};

/// This includes all bundled blob related data of an executed payload.
/// The three lists are positional: entry `i` of each belongs to the same blob.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobsBundleV1 {
    /// All commitments in the bundle.
    pub commitments: KzgCommitments,
    /// All proofs in the bundle.
    pub proofs: KzgProofs,
    /// All blobs in the bundle.
    pub blobs: Blobs,
}

impl BlobsBundleV1 {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commitments: Vec::with_capacity(capacity),
            proofs: Vec::with_capacity(capacity),
            blobs: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, blob: Blob, commitment: KzgCommitment, proof: KzgProof) {
        self.blobs.push(blob);
        self.commitments.push(commitment);
        self.proofs.push(proof);
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty() && self.commitments.is_empty() && self.proofs.is_empty()
    }

    /// Iterates `(blob, commitment, proof)` triples, stopping at the shortest list.
    pub fn iter(&self) -> impl Iterator<Item = (&Blob, &KzgCommitment, &KzgProof)> {
        self.blobs
            .iter()
            .zip(self.commitments.iter())
            .zip(self.proofs.iter())
            .map(|((blob, commitment), proof)| (blob, commitment, proof))
    }
}
