use aegis_types::BidTrace;

use crate::{block::ExecutionBlock, error::ConsistencyError};

/// Ensures that the fields of the [`BidTrace`] match the reconstructed block.
pub fn validate_message_against_block(
    block: &ExecutionBlock,
    message: &BidTrace,
) -> Result<(), ConsistencyError> {
    if block.parent_hash() != message.parent_hash {
        Err(ConsistencyError::ParentHash {
            got: block.parent_hash(),
            expected: message.parent_hash,
        })
    } else if block.hash() != message.block_hash {
        Err(ConsistencyError::BlockHash { got: block.hash(), expected: message.block_hash })
    } else if block.gas_limit() != message.gas_limit {
        Err(ConsistencyError::GasLimit { got: block.gas_limit(), expected: message.gas_limit })
    } else if block.gas_used() != message.gas_used {
        Err(ConsistencyError::GasUsed { got: block.gas_used(), expected: message.gas_used })
    } else {
        Ok(())
    }
}
