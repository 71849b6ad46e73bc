use aegis_types::{
    BuilderBlockValidationRequest, BuilderBlockValidationRequestV2,
    BuilderBlockValidationRequestV3,
};
use async_trait::async_trait;
use jsonrpsee::{
    core::{RegisterMethodError, RpcResult},
    proc_macros::rpc,
    types::{error::INVALID_PARAMS_CODE, ErrorObject, ErrorObjectOwned},
    RpcModule,
};
use tracing::error;

use crate::{
    api::BlockValidationApi,
    chain::ChainValidator,
    config::BlockValidationConfig,
    error::{DecodeError, ValidationError},
    submission::{PayloadVersion, Submission},
};

/// Error code for submissions that decoded but failed validation.
pub const VALIDATION_ERROR_CODE: i32 = -32000;

/// Block validation rpc interface.
#[rpc(server, namespace = "flashbots")]
pub trait BlockSubmissionValidationApi {
    /// A Request to validate a bellatrix block submission.
    #[method(name = "validateBuilderSubmissionV1")]
    async fn validate_builder_submission_v1(
        &self,
        request: BuilderBlockValidationRequest,
    ) -> RpcResult<()>;

    /// A Request to validate a capella block submission.
    #[method(name = "validateBuilderSubmissionV2")]
    async fn validate_builder_submission_v2(
        &self,
        request: BuilderBlockValidationRequestV2,
    ) -> RpcResult<()>;

    /// A Request to validate a deneb block submission.
    #[method(name = "validateBuilderSubmissionV3")]
    async fn validate_builder_submission_v3(
        &self,
        request: BuilderBlockValidationRequestV3,
    ) -> RpcResult<()>;
}

impl From<ValidationError> for ErrorObjectOwned {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::Decode(_) => {
                ErrorObject::owned(INVALID_PARAMS_CODE, error.to_string(), None::<()>)
            }
            ValidationError::Conversion(_) |
            ValidationError::Consistency(_) |
            ValidationError::Blobs(_) |
            ValidationError::Payment(_) => {
                ErrorObject::owned(VALIDATION_ERROR_CODE, error.to_string(), None::<()>)
            }
        }
    }
}

impl<V: ChainValidator + 'static> BlockValidationApi<V> {
    async fn validate_request<R>(&self, version: PayloadVersion, request: R) -> RpcResult<()>
    where
        Submission: TryFrom<R, Error = DecodeError>,
    {
        let submission = Submission::try_from(request).map_err(|err| {
            error!(%version, %err, "invalid submission");
            ValidationError::from(err)
        })?;
        Ok(self.validate_submission(submission).await?)
    }
}

#[async_trait]
impl<V: ChainValidator + 'static> BlockSubmissionValidationApiServer for BlockValidationApi<V> {
    async fn validate_builder_submission_v1(
        &self,
        request: BuilderBlockValidationRequest,
    ) -> RpcResult<()> {
        self.validate_request(PayloadVersion::V1, request).await
    }

    async fn validate_builder_submission_v2(
        &self,
        request: BuilderBlockValidationRequestV2,
    ) -> RpcResult<()> {
        self.validate_request(PayloadVersion::V2, request).await
    }

    async fn validate_builder_submission_v3(
        &self,
        request: BuilderBlockValidationRequestV3,
    ) -> RpcResult<()> {
        self.validate_request(PayloadVersion::V3, request).await
    }
}

/// Builds a validator from `config` and merges the `flashbots` namespace into `module`.
pub fn register<Ctx, V>(
    module: &mut RpcModule<Ctx>,
    chain_validator: V,
    config: &BlockValidationConfig,
) -> Result<(), RegisterMethodError>
where
    V: ChainValidator + 'static,
{
    let api = BlockValidationApi::new(chain_validator, config);
    module.merge(api.into_rpc())
}
