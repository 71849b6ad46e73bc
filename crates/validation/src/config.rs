use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::chain::ProfitMode;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockValidationConfig {
    /// Check the proposer payment through its balance difference instead of the last
    /// transaction of the block.
    #[serde(default)]
    pub use_balance_diff_profit: bool,
}

impl BlockValidationConfig {
    pub fn profit_mode(&self) -> ProfitMode {
        if self.use_balance_diff_profit {
            ProfitMode::BalanceDiff
        } else {
            ProfitMode::DirectPayment
        }
    }
}

/// Block validation flags, meant to be flattened into a host's command line.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BlockValidationArgs {
    /// Use the balance difference of the fee recipient to compute the builder's profit.
    #[arg(long = "use-balance-diff-profit", default_value_t = false)]
    pub use_balance_diff_profit: bool,
}

impl From<BlockValidationArgs> for BlockValidationConfig {
    fn from(args: BlockValidationArgs) -> Self {
        Self { use_balance_diff_profit: args.use_balance_diff_profit }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoggingConfig {
    #[default]
    Console,
    File {
        dir_path: String,
        file_name: String,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AegisConfig {
    #[serde(default)]
    pub validation: BlockValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AegisConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config: AegisConfig = serde_yaml::from_reader(file)?;
        Ok(config)
    }
}
