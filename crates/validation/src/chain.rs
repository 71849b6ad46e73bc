use aegis_types::BlsPublicKeyBytes;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{block::ExecutionBlock, error::ChainValidationError};

/// How the chain validator decides that the proposer was paid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitMode {
    /// The last transaction of the block pays the proposer directly.
    #[default]
    DirectPayment,
    /// The proposer's balance difference across the block covers the bid value.
    BalanceDiff,
}

/// Execution knobs handed to the chain validator. A fresh default is used for every request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub no_base_fee: bool,
    pub enable_preimage_recording: bool,
    pub extra_eips: Vec<u64>,
}

/// Re-executes a block on top of its parent and checks that it pays the proposer.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait ChainValidator: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    async fn validate_payload(
        &self,
        block: &ExecutionBlock,
        fee_recipient: Address,
        expected_profit: U256,
        registered_gas_limit: u64,
        config: &ExecutionConfig,
        profit_mode: ProfitMode,
        builder_pubkey: Option<&BlsPublicKeyBytes>,
    ) -> Result<(), ChainValidationError>;
}
