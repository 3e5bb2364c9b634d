//! Credence participant registry command line interface
//!
//! Drives an in-process registry contract over a local sled database,
//! standing in for the ledger host during development and testing.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use credence_registry::{LocalRuntime, ProgramRegistry, RegistryConfig, SledStore};
use credence_types::{tokens, AccountId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "credence-cli")]
#[command(about = "Credence participant registry command line interface", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the registry database
    #[arg(long, default_value = "credence.db")]
    db: PathBuf,

    /// Path to a TOML config file (admin, fee, reward)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the calling account as a participant
    Register {
        /// Display name (3 or more characters)
        name: String,
        /// Age in years
        age: u64,
        /// Account signing the call
        #[arg(long = "as", value_name = "ACCOUNT")]
        caller: AccountId,
        /// Attached deposit in whole tokens
        #[arg(long, default_value_t = 1)]
        deposit: u64,
    },
    /// Certify a participant and pay out the reward (admin only)
    Certify {
        /// Account of the participant to certify
        account: AccountId,
        /// Account signing the call
        #[arg(long = "as", value_name = "ACCOUNT")]
        caller: AccountId,
    },
    /// Look up one participant
    Get {
        /// Account to look up
        account: AccountId,
    },
    /// List all registered participants
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RegistryConfig::load(path)?,
        None => RegistryConfig::new(AccountId::new("admin.credence")),
    };

    let store = SledStore::open(&cli.db)
        .with_context(|| format!("failed to open registry database {}", cli.db.display()))?;
    let registry = ProgramRegistry::new(store, config);

    match cli.command {
        Commands::Register {
            name,
            age,
            caller,
            deposit,
        } => {
            let host = LocalRuntime::new(caller).with_deposit(tokens(deposit));
            registry.register(&host, &name, age)?;
            println!("registered '{name}'");
        }
        Commands::Certify { account, caller } => {
            let host = LocalRuntime::new(caller);
            if registry.certify(&host, &account)? {
                println!("certified {account}");
            } else {
                println!("no certification performed for {account}");
            }
        }
        Commands::Get { account } => match registry.get(&account)? {
            Some(participant) => println!("{}", serde_json::to_string_pretty(&participant)?),
            None => println!("participant {account} not found"),
        },
        Commands::List => {
            let participants = registry.list()?;
            println!("{}", serde_json::to_string_pretty(&participants)?);
        }
    }

    Ok(())
}
