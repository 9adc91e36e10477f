//! OpenShield CLI - build, validate and sign shield commands
//!
//! Each subcommand constructs one command from the shield set, runs
//! structural validation, and prints a JSON report with the routing key,
//! type tag, resolved signers, canonical encoding and content digest.
//! Validation failures exit non-zero with the specific failure kind so the
//! caller can correct and resubmit.
//!
//! # Quick Start
//!
//! ```bash
//! openshield create-pool --from deadbeef --shield 1000ushield \
//!     --native 500ushield --foreign 2wbtc --sponsor certik --duration 100
//!
//! openshield purchase-shield --pool 7 --shield 100ushield \
//!     --description "cover dex deployment" --from deadbeef --sign
//! ```

use anyhow::bail;
use clap::{Parser, Subcommand};
use openshield_core::{
    AccountId, ClearPayouts, Coin, Coins, CreatePool, DepositCollateral, MixedCoins, PausePool,
    PurchaseShield, ResumePool, ShieldCommand, UpdatePool, WithdrawCollateral,
    WithdrawForeignRewards, WithdrawReimbursement, WithdrawRewards,
};
use openshield_crypto::KeyPair;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// OpenShield CLI - the command layer of the shield protocol
#[derive(Parser)]
#[command(name = "openshield")]
#[command(author = "OpenShield Contributors")]
#[command(version)]
#[command(about = "Build, validate and sign shield protocol commands", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Sign the canonical bytes with an ephemeral Ed25519 key
    #[arg(long, global = true)]
    sign: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a new coverage pool
    CreatePool {
        /// Pool creator account (hex)
        #[arg(long)]
        from: AccountId,
        /// Coverage the pool can issue, e.g. "1000ushield"
        #[arg(long)]
        shield: Coins,
        /// Native-denomination deposit, e.g. "500ushield"
        #[arg(long, default_value = "")]
        native: Coins,
        /// Foreign-denomination deposit, e.g. "2wbtc"
        #[arg(long, default_value = "")]
        foreign: Coins,
        /// Display name of the covered project
        #[arg(long)]
        sponsor: String,
        /// Coverage duration
        #[arg(long)]
        duration: i64,
    },

    /// Adjust an existing pool's shield, deposit or duration
    UpdatePool {
        /// Pool admin account (hex)
        #[arg(long)]
        from: AccountId,
        /// New coverage capacity
        #[arg(long)]
        shield: Coins,
        /// Native-denomination top-up (zero permitted)
        #[arg(long, default_value = "")]
        native: Coins,
        /// Foreign-denomination top-up (zero permitted)
        #[arg(long, default_value = "")]
        foreign: Coins,
        /// Pool identifier
        #[arg(long)]
        pool: u64,
        /// Extension of the coverage period
        #[arg(long)]
        additional_duration: i64,
    },

    /// Pause a pool so it stops issuing new coverage
    PausePool {
        #[arg(long)]
        from: AccountId,
        #[arg(long)]
        pool: u64,
    },

    /// Resume a paused pool
    ResumePool {
        #[arg(long)]
        from: AccountId,
        #[arg(long)]
        pool: u64,
    },

    /// Deposit collateral behind a pool's coverage
    DepositCollateral {
        #[arg(long)]
        from: AccountId,
        #[arg(long)]
        pool: u64,
        /// Collateral coin, e.g. "50ushield"
        #[arg(long)]
        collateral: Coin,
    },

    /// Withdraw collateral from a pool
    WithdrawCollateral {
        #[arg(long)]
        from: AccountId,
        #[arg(long)]
        pool: u64,
        /// Collateral coin, e.g. "50ushield"
        #[arg(long)]
        collateral: Coin,
    },

    /// Withdraw accumulated native-denomination rewards
    WithdrawRewards {
        #[arg(long)]
        from: AccountId,
    },

    /// Withdraw foreign-denomination rewards to an external destination
    WithdrawForeignRewards {
        #[arg(long)]
        from: AccountId,
        /// Foreign denomination being withdrawn
        #[arg(long)]
        denom: String,
        /// Destination address on the foreign chain
        #[arg(long)]
        to: String,
    },

    /// Clear pending payouts for a denomination
    ClearPayouts {
        #[arg(long)]
        from: AccountId,
        #[arg(long)]
        denom: String,
    },

    /// Purchase shield coverage from a pool
    PurchaseShield {
        #[arg(long)]
        pool: u64,
        /// Coverage amount being purchased
        #[arg(long)]
        shield: Coins,
        /// What the purchase protects
        #[arg(long)]
        description: String,
        #[arg(long)]
        from: AccountId,
    },

    /// Withdraw a reimbursement granted by a governance proposal
    WithdrawReimbursement {
        #[arg(long)]
        proposal: u64,
        #[arg(long)]
        from: AccountId,
    },
}

fn build(command: Commands) -> ShieldCommand {
    match command {
        Commands::CreatePool {
            from,
            shield,
            native,
            foreign,
            sponsor,
            duration,
        } => ShieldCommand::CreatePool(CreatePool::new(
            from,
            shield,
            MixedCoins::new(native, foreign),
            sponsor,
            duration,
        )),
        Commands::UpdatePool {
            from,
            shield,
            native,
            foreign,
            pool,
            additional_duration,
        } => ShieldCommand::UpdatePool(UpdatePool::new(
            from,
            shield,
            MixedCoins::new(native, foreign),
            pool,
            additional_duration,
        )),
        Commands::PausePool { from, pool } => {
            ShieldCommand::PausePool(PausePool::new(from, pool))
        }
        Commands::ResumePool { from, pool } => {
            ShieldCommand::ResumePool(ResumePool::new(from, pool))
        }
        Commands::DepositCollateral {
            from,
            pool,
            collateral,
        } => ShieldCommand::DepositCollateral(DepositCollateral::new(from, pool, collateral)),
        Commands::WithdrawCollateral {
            from,
            pool,
            collateral,
        } => ShieldCommand::WithdrawCollateral(WithdrawCollateral::new(from, pool, collateral)),
        Commands::WithdrawRewards { from } => {
            ShieldCommand::WithdrawRewards(WithdrawRewards::new(from))
        }
        Commands::WithdrawForeignRewards { from, denom, to } => {
            ShieldCommand::WithdrawForeignRewards(WithdrawForeignRewards::new(from, denom, to))
        }
        Commands::ClearPayouts { from, denom } => {
            ShieldCommand::ClearPayouts(ClearPayouts::new(from, denom))
        }
        Commands::PurchaseShield {
            pool,
            shield,
            description,
            from,
        } => ShieldCommand::PurchaseShield(PurchaseShield::new(pool, shield, description, from)),
        Commands::WithdrawReimbursement { proposal, from } => {
            ShieldCommand::WithdrawReimbursement(WithdrawReimbursement::new(proposal, from))
        }
    }
}

fn report(command: ShieldCommand, sign: bool) -> anyhow::Result<()> {
    debug!(type_tag = command.type_tag(), "validating command");
    if let Err(err) = command.validate() {
        bail!("validation failed for {}: {err}", command.type_tag());
    }

    let bytes = command.sign_bytes()?;
    debug!(len = bytes.len(), "canonical encoding produced");

    let mut out = serde_json::json!({
        "route": command.route(),
        "type": command.type_tag(),
        "signers": command
            .signers()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "canonical": serde_json::from_slice::<serde_json::Value>(&bytes)?,
        "digest": command.digest_hex()?,
    });

    if sign {
        let keypair = KeyPair::generate();
        let signature = openshield_crypto::sign(&keypair, &command)?;
        debug!(signer = %keypair.account_id(), "signed with ephemeral key");
        out["signature"] = serde_json::to_value(&signature)?;
        out["signer_account"] = keypair.account_id().to_string().into();
    }

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let command = build(cli.command);
    report(command, cli.sign)
}
