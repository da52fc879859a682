//! Virtual Frontier CLI Application
//!
//! A command-line sandbox for deploying and calling bank contracts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use virtual_frontier::cli::{self, AppState, DEFAULT_CALL_GAS};

#[derive(Parser)]
#[command(name = "vfc")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Virtual frontier bank contract sandbox", long_about = None)]
struct Cli {
    /// Data directory for sandbox state
    #[arg(short, long, default_value = ".vfc_data")]
    data_dir: PathBuf,

    /// Keeper configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new sandbox at genesis
    Init {
        /// Native denom of the chain
        #[arg(long, default_value = "aphoton")]
        native_denom: String,

        /// Decimals of the native denom
        #[arg(long, default_value = "18")]
        decimals: u32,

        /// JSON file with additional genesis denom metadata
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },

    /// Register ledger metadata for a denom
    AddDenom {
        /// Base denom
        denom: String,

        /// Decimals of the display unit
        #[arg(long, default_value = "6")]
        decimals: u32,
    },

    /// Mint coins to an address
    Mint {
        /// Recipient address
        #[arg(short, long)]
        to: String,

        /// Denom to mint
        #[arg(long)]
        denom: String,

        /// Amount in base units
        #[arg(short, long)]
        amount: String,
    },

    /// Deploy a bank contract for a denom
    Deploy {
        /// Base denom
        denom: String,
    },

    /// Start the next block
    BeginBlock,

    /// Call a contract with raw call data
    Call {
        /// Caller address
        #[arg(short, long)]
        from: String,

        /// Contract address
        #[arg(short, long)]
        to: String,

        /// Call data (hex)
        #[arg(short, long)]
        input: String,

        /// Gas limit
        #[arg(long, default_value_t = DEFAULT_CALL_GAS)]
        gas: u64,
    },

    /// ERC-20 transfer through a bank contract
    Transfer {
        /// Sender address
        #[arg(short, long)]
        from: String,

        /// Bank contract address
        #[arg(short, long)]
        contract: String,

        /// Recipient address
        #[arg(short, long)]
        to: String,

        /// Amount in base units
        #[arg(short, long)]
        amount: String,

        /// Gas limit
        #[arg(long, default_value_t = DEFAULT_CALL_GAS)]
        gas: u64,
    },

    /// Activate a contract through governance
    Activate {
        /// Contract address
        address: String,
    },

    /// Deactivate a contract through governance
    Deactivate {
        /// Contract address
        address: String,
    },

    /// List all contracts
    List,

    /// Show contract info
    Info {
        /// Contract address
        address: String,
    },

    /// Show a ledger balance
    Balance {
        /// Account address
        address: String,

        /// Denom
        #[arg(long)]
        denom: String,
    },

    /// Export the current snapshot to a file
    Export {
        /// Output file (JSON)
        path: PathBuf,
    },

    /// List snapshot backups
    Backups,

    /// Roll back to a snapshot backup
    Restore {
        /// Backup index, 0 is the most recent
        index: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli::load_config(cli.config.as_deref())?;

    // Handle init command separately (doesn't need existing state)
    if let Commands::Init {
        native_denom,
        decimals,
        metadata,
    } = &cli.command
    {
        return cli::cmd_init(&cli.data_dir, config, native_denom, *decimals, metadata.as_deref());
    }

    let mut state = AppState::new(cli.data_dir.clone(), config)?;

    match cli.command {
        Commands::Init { .. } => unreachable!(),
        Commands::AddDenom { denom, decimals } => {
            cli::cmd_add_denom(&mut state, &denom, decimals)?;
        }
        Commands::Mint { to, denom, amount } => {
            cli::cmd_mint(&mut state, &to, &denom, &amount)?;
        }
        Commands::Deploy { denom } => {
            cli::cmd_deploy(&mut state, &denom)?;
        }
        Commands::BeginBlock => {
            cli::cmd_begin_block(&mut state)?;
        }
        Commands::Call {
            from,
            to,
            input,
            gas,
        } => {
            cli::cmd_call(&mut state, &from, &to, &input, gas)?;
        }
        Commands::Transfer {
            from,
            contract,
            to,
            amount,
            gas,
        } => {
            cli::cmd_transfer(&mut state, &from, &contract, &to, &amount, gas)?;
        }
        Commands::Activate { address } => {
            cli::cmd_set_active(&mut state, &address, true)?;
        }
        Commands::Deactivate { address } => {
            cli::cmd_set_active(&mut state, &address, false)?;
        }
        Commands::List => {
            cli::cmd_list(&mut state)?;
        }
        Commands::Info { address } => {
            cli::cmd_info(&mut state, &address)?;
        }
        Commands::Balance { address, denom } => {
            cli::cmd_balance(&mut state, &address, &denom)?;
        }
        Commands::Export { path } => {
            cli::cmd_export(&mut state, &path)?;
        }
        Commands::Backups => {
            cli::cmd_backups(&mut state)?;
        }
        Commands::Restore { index } => {
            cli::cmd_restore(&mut state, index)?;
        }
    }

    Ok(())
}
