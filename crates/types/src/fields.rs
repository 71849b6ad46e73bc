use std::sync::Arc;

use alloy_primitives::{Bytes, FixedBytes};

pub type BlsPublicKeyBytes = FixedBytes<48>;
pub type BlsSignatureBytes = FixedBytes<96>;
pub type KzgCommitment = alloy_eips::eip4844::Bytes48;
pub type KzgCommitments = Vec<KzgCommitment>;
pub type KzgProof = alloy_eips::eip4844::Bytes48;
pub type KzgProofs = Vec<KzgProof>;
/// Blobs are 128KiB, shared rather than moved.
pub type Blob = Arc<alloy_eips::eip4844::Blob>;
pub type Blobs = Vec<Blob>;

/// Opaque EIP-2718 encoded transaction, as carried in the payload.
pub type Transaction = Bytes;
pub type Transactions = Vec<Transaction>;

pub type ExtraData = Bytes;
