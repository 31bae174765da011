//! Stipend CLI - Main entry point

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use stipend_rpc::{commands, AppContext};

#[derive(Parser)]
#[command(name = "stipend")]
#[command(about = "Stipend - allowance disbursement registry", long_about = None)]
struct Cli {
    /// Data directory path
    #[arg(short, long, default_value = "./data")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a data directory with a fixed approval quorum
    Init {
        /// Distinct reviewer signatures required for approval
        #[arg(long, default_value_t = 2)]
        quorum: u32,
    },

    /// Grant a role (REVIEWER or ADMIN) to a principal
    Grant { role: String, who: String },

    /// Fund the custodial pool
    Fund { amount: Decimal },

    /// Submit a new application
    Submit {
        /// Applicant identity
        applicant: String,
        /// Applicant-supplied reference data
        info: String,
        /// Amount requested, in the smallest currency unit
        amount: Decimal,
    },

    /// Verify an application (caller must hold REVIEWER)
    Verify { id: u64, caller: String },

    /// Sign an application (caller must hold REVIEWER)
    Sign { id: u64, caller: String },

    /// Claim an approved application (caller must be the applicant)
    Claim { id: u64, caller: String },

    /// Show the pool balance
    Balance,

    /// Show one application
    Show { id: u64 },

    /// List all applications
    List,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { quorum } => {
            let ctx = AppContext::init(&cli.data, quorum)?;
            println!(
                "Initialized {} (quorum: {})",
                cli.data.display(),
                ctx.registry.required_approvals()
            );
            Ok(())
        }
        command => {
            let mut ctx = AppContext::load(&cli.data)?;
            match command {
                Commands::Init { .. } => unreachable!("handled above"),
                Commands::Grant { role, who } => commands::grant(&mut ctx, &role, &who),
                Commands::Fund { amount } => commands::fund(&mut ctx, amount),
                Commands::Submit {
                    applicant,
                    info,
                    amount,
                } => commands::submit(&mut ctx, &applicant, &info, amount),
                Commands::Verify { id, caller } => commands::verify(&mut ctx, id, &caller),
                Commands::Sign { id, caller } => commands::sign(&mut ctx, id, &caller),
                Commands::Claim { id, caller } => commands::claim(&mut ctx, id, &caller),
                Commands::Balance => commands::balance(&ctx),
                Commands::Show { id } => commands::show(&ctx, id),
                Commands::List => commands::list(&ctx),
            }
        }
    }
}
