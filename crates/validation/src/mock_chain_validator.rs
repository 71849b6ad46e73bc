use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use aegis_types::BlsPublicKeyBytes;
use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    block::ExecutionBlock,
    chain::{ChainValidator, ExecutionConfig, ProfitMode},
    error::ChainValidationError,
};

/// Arguments of one `validate_payload` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub block_hash: B256,
    pub fee_recipient: Address,
    pub expected_profit: U256,
    pub registered_gas_limit: u64,
    pub config: ExecutionConfig,
    pub profit_mode: ProfitMode,
    pub builder_pubkey: Option<BlsPublicKeyBytes>,
}

/// Chain validator that records its calls and answers with scripted results. Once the script
/// runs out every call is accepted.
#[derive(Clone, Default)]
pub struct MockChainValidator {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    results: Arc<Mutex<VecDeque<Result<(), String>>>>,
    /// When set, calls park until the request future is dropped.
    hang: bool,
    dropped: Arc<AtomicUsize>,
}

impl MockChainValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(reason: &str) -> Self {
        let mock = Self::default();
        mock.push_result(Err(reason.to_string()));
        mock
    }

    /// Validator whose calls never complete.
    pub fn hanging() -> Self {
        Self { hang: true, ..Self::default() }
    }

    pub fn push_result(&self, result: Result<(), String>) {
        self.results.lock().push_back(result);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Number of in-flight calls whose future was dropped before completing.
    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }
}

struct DropGuard(Arc<AtomicUsize>);

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChainValidator for MockChainValidator {
    async fn validate_payload(
        &self,
        block: &ExecutionBlock,
        fee_recipient: Address,
        expected_profit: U256,
        registered_gas_limit: u64,
        config: &ExecutionConfig,
        profit_mode: ProfitMode,
        builder_pubkey: Option<&BlsPublicKeyBytes>,
    ) -> Result<(), ChainValidationError> {
        self.calls.lock().push(RecordedCall {
            block_hash: block.hash(),
            fee_recipient,
            expected_profit,
            registered_gas_limit,
            config: config.clone(),
            profit_mode,
            builder_pubkey: builder_pubkey.copied(),
        });

        if self.hang {
            let guard = DropGuard(self.dropped.clone());
            std::future::pending::<()>().await;
            std::mem::forget(guard);
        }

        let result = self.results.lock().pop_front().unwrap_or(Ok(()));
        result.map_err(ChainValidationError::new)
    }
}
