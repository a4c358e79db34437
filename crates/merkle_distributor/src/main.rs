use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use merkle_distributor::ledger::LedgerFile;
use merkle_distributor::publish::{publish, read_distribution};
use merkle_distributor::utils::codec::parse_address;
use merkle_distributor::{build_distribution, DistributorConfig, Keccak256Hasher};

#[derive(Parser)]
#[command(name = "merkle-distributor")]
#[command(about = "Build and verify cumulative reward merkle distributions", long_about = None)]
struct Cli {
    /// Increase verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a distribution from a ledger file and publish it
    Build {
        /// Ledger JSON with this cycle's rewards
        #[arg(long)]
        ledger: PathBuf,
        /// Previously published distribution to carry cumulative amounts from
        #[arg(long)]
        previous: Option<PathBuf>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory, overrides the config
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check published claims against the document's merkle root
    Verify {
        /// Distribution JSON to check
        #[arg(long)]
        distribution: PathBuf,
        /// Only check this claimant
        #[arg(long)]
        user: Option<String>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build {
            ledger,
            previous,
            config,
            output,
        } => {
            let config = match config {
                Some(path) => DistributorConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => DistributorConfig::default(),
            }
            .with_output_dir(output);

            let previous = previous
                .map(|path| {
                    read_distribution(&path)
                        .with_context(|| format!("reading previous distribution {}", path.display()))
                })
                .transpose()?;

            let ledger = LedgerFile::load(&ledger)
                .with_context(|| format!("reading ledger {}", ledger.display()))?
                .into_ledger(previous.as_ref())?;
            let input = ledger.to_merkle_format()?;

            let hasher = Keccak256Hasher;
            let distribution = build_distribution(&hasher, &input)?;
            let path = publish(&config, &hasher, &distribution)?;
            println!("merkle root: {}", distribution.merkle_root);
            println!("written to: {}", path.display());
        }

        Commands::Verify { distribution, user } => {
            let document = read_distribution(&distribution)
                .with_context(|| format!("reading distribution {}", distribution.display()))?;
            let hasher = Keccak256Hasher;

            match user {
                Some(user) => {
                    let user = parse_address(&user)?;
                    if !document.verify_claim(&hasher, &user)? {
                        bail!("proof for {user} does not match root {}", document.merkle_root);
                    }
                    info!(%user, "claim verified");
                }
                None => {
                    document.verify_all(&hasher)?;
                    info!(claims = document.claims.len(), "all claims verified");
                }
            }
            println!("ok: {}", document.merkle_root);
        }
    }

    Ok(())
}
