use std::path::PathBuf;

use aegis_validation::{
    check_submission, decode_submission, init_tracing, AegisConfig, EnvKzgSettings,
    PayloadVersion,
};
use clap::{Args, Parser, Subcommand};
use eyre::WrapErr;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "aegis", about = "Builder submission validation tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a validation request and run every check that needs no chain state.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Payload version of the request.
    #[arg(long, value_enum)]
    version: PayloadVersion,
    /// Optional YAML config, only the logging section is used.
    #[arg(long)]
    config: Option<PathBuf>,
    /// File holding the JSON request body.
    file: PathBuf,
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => check(args),
    }
}

fn check(args: CheckArgs) -> eyre::Result<()> {
    let config = match &args.config {
        Some(path) => AegisConfig::load(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => AegisConfig::default(),
    };
    let _guard = init_tracing(&config.logging)?;

    let data = std::fs::read(&args.file)
        .wrap_err_with(|| format!("failed to read {}", args.file.display()))?;

    let block = decode_submission(args.version, &data)
        .and_then(|submission| check_submission(&submission, &EnvKzgSettings::Default))
        .inspect_err(|err| error!(version = %args.version, stage = err.stage(), %err, "rejected"))?;

    info!(block_hash = %block.hash(), number = block.number(), "submission passed offline checks");
    println!(
        "block_hash={} number={} parent_hash={}",
        block.hash(),
        block.number(),
        block.parent_hash()
    );

    Ok(())
}
