use std::sync::Arc;

use alloy_eips::eip4844::env_settings::EnvKzgSettings;
use tracing::{debug, error, info};

use crate::{
    blobs::validate_blobs_bundle,
    block::{payload_to_block, ExecutionBlock},
    chain::{ChainValidator, ExecutionConfig, ProfitMode},
    config::BlockValidationConfig,
    consistency::validate_message_against_block,
    error::ValidationError,
    submission::{decode_submission, PayloadVersion, Submission},
};

/// Validates builder submissions of every payload version.
pub struct BlockValidationApi<V> {
    inner: Arc<BlockValidationApiInner<V>>,
}

struct BlockValidationApiInner<V> {
    /// Re-executes blocks and checks the proposer payment.
    chain_validator: V,
    profit_mode: ProfitMode,
    kzg_settings: EnvKzgSettings,
}

impl<V> Clone for BlockValidationApi<V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<V: ChainValidator> BlockValidationApi<V> {
    /// Create a new instance using the mainnet KZG trusted setup.
    pub fn new(chain_validator: V, config: &BlockValidationConfig) -> Self {
        Self::with_kzg_settings(chain_validator, config, EnvKzgSettings::Default)
    }

    pub fn with_kzg_settings(
        chain_validator: V,
        config: &BlockValidationConfig,
        kzg_settings: EnvKzgSettings,
    ) -> Self {
        let inner = BlockValidationApiInner {
            chain_validator,
            profit_mode: config.profit_mode(),
            kzg_settings,
        };
        Self { inner: Arc::new(inner) }
    }

    pub fn profit_mode(&self) -> ProfitMode {
        self.inner.profit_mode
    }

    /// See [`check_submission`].
    pub fn check_submission(
        &self,
        submission: &Submission,
    ) -> Result<ExecutionBlock, ValidationError> {
        check_submission(submission, &self.inner.kzg_settings)
    }

    /// Validates a decoded submission end to end.
    pub async fn validate_submission(&self, submission: Submission) -> Result<(), ValidationError> {
        let result = self.validate_submission_inner(&submission).await;

        let payload = submission.payload.as_v1();
        match &result {
            Ok(()) => info!(
                block_hash = %payload.block_hash,
                number = payload.block_number,
                parent_hash = %payload.parent_hash,
                "validated block"
            ),
            Err(err) => error!(
                block_hash = %payload.block_hash,
                number = payload.block_number,
                parent_hash = %payload.parent_hash,
                stage = err.stage(),
                %err,
                "invalid payload"
            ),
        }

        result
    }

    /// Decodes a raw request body of the given version and validates it.
    pub async fn validate_raw_submission(
        &self,
        version: PayloadVersion,
        data: &[u8],
    ) -> Result<(), ValidationError> {
        let submission = decode_submission(version, data).inspect_err(|err| {
            error!(%version, %err, "invalid submission");
        })?;
        self.validate_submission(submission).await
    }

    async fn validate_submission_inner(
        &self,
        submission: &Submission,
    ) -> Result<(), ValidationError> {
        let block = self.check_submission(submission)?;

        let message = &submission.message;
        self.inner
            .chain_validator
            .validate_payload(
                &block,
                message.proposer_fee_recipient,
                message.value,
                submission.registered_gas_limit,
                &ExecutionConfig::default(),
                self.inner.profit_mode,
                submission.payment_builder_pubkey(),
            )
            .await?;

        Ok(())
    }
}

/// Runs every stage up to and including blob verification and returns the reconstructed block.
/// The chain validator is not involved.
pub fn check_submission(
    submission: &Submission,
    kzg_settings: &EnvKzgSettings,
) -> Result<ExecutionBlock, ValidationError> {
    debug!(version = %submission.version(), "reconstructing block");
    let block = payload_to_block(&submission.payload)?;

    debug!(block_hash = %block.hash(), "checking bid trace");
    validate_message_against_block(&block, &submission.message)?;

    if let Some(blobs_bundle) = submission.payload.blobs_bundle() {
        validate_blobs_bundle(&block, blobs_bundle, kzg_settings)?;
    }

    Ok(block)
}
