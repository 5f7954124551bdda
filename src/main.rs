use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};

use ledger_view::cli::{
    handle_accounts_command, handle_audit_command, handle_bills_command, handle_connect_command,
    handle_export_command, handle_pay_command, handle_statements_command, handle_summary_command,
    handle_upload_command, report_rejected_records, AccountCommands, BillCommands, ExportEntity,
    ExportFormat,
};
use ledger_view::config::paths::{LedgerPaths, DATA_DIR_ENV};
use ledger_view::config::settings::Settings;
use ledger_view::source::{sample_accounts, sample_bills, MemorySource};
use ledger_view::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Accounts, net worth and upcoming bills in the terminal",
    long_about = "ledger-view keeps a local list of your financial accounts and bills \
                  and shows net worth, assets against debts, and what is coming due."
)]
struct Cli {
    /// Base directory for ledger data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Show accounts, bills and the summary from the built-in sample ledger
    /// instead of stored data; nothing on disk is read or created
    #[arg(long, global = true)]
    sample: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and seed the sample ledger
    Init {
        /// Replace existing accounts, bills and statements
        #[arg(long)]
        force: bool,
    },

    /// Net worth and the account list
    #[command(alias = "account")]
    Accounts {
        /// Only show one account type (checking, savings, credit, investment, loan)
        #[arg(short = 't', long = "type")]
        account_type: Option<String>,

        #[command(subcommand)]
        command: Option<AccountCommands>,
    },

    /// Upcoming total, status counts and the bill list
    #[command(alias = "bill")]
    Bills {
        /// Only show one status (all, upcoming, overdue, paid)
        #[arg(short, long)]
        filter: Option<String>,

        #[command(subcommand)]
        command: Option<BillCommands>,
    },

    /// One-screen ledger summary
    Summary,

    /// Link an account to its institution
    Connect {
        /// Account name or ID
        account: String,
    },

    /// Mark a bill as paid
    Pay {
        /// Bill name or ID
        bill: String,
    },

    /// Queue a statement file (csv, ofx, qfx, pdf) for import
    Upload {
        /// Path to the statement file
        file: PathBuf,

        /// Account the statement belongs to
        #[arg(short, long)]
        account: Option<String>,
    },

    /// List uploaded statements
    Statements,

    /// Export data to a file
    Export {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Table to write for CSV exports
        #[arg(short, long, value_enum, default_value = "accounts")]
        entity: ExportEntity,
    },

    /// Show recent audit log entries
    Audit {
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

/// Open storage and load only the repositories a command reads
fn open_storage(paths: &LedgerPaths, accounts: bool, bills: bool) -> Result<Storage> {
    let storage = Storage::new(paths.clone())?;
    if accounts {
        storage.accounts.load()?;
    }
    if bills {
        storage.bills.load()?;
    }
    report_rejected_records(&storage)?;
    Ok(storage)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let now = Utc::now();
    let today = Local::now().date_naive();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init { force }) => {
            let mut storage = open_storage(&paths, true, true)?;
            if storage.has_data()? {
                if !force {
                    bail!(
                        "{} already holds a ledger; run 'ledger init --force' to replace it",
                        paths.base_dir().display()
                    );
                }
                storage.reset()?;
            }

            let accounts = sample_accounts(now)
                .into_iter()
                .map(|mut account| {
                    account.currency = settings.default_currency.clone();
                    account
                })
                .collect();
            storage.seed(accounts, sample_bills(today), now)?;

            settings.setup_completed = true;
            settings.save(&paths)?;

            println!("Initialized ledger at: {}", paths.base_dir().display());
            println!(
                "Seeded {} accounts and {} bills.",
                storage.accounts.count()?,
                storage.bills.count()?
            );
            println!();
            println!("Run 'ledger accounts' or 'ledger bills' to see them.");
        }
        Some(Commands::Accounts {
            account_type,
            command,
        }) => {
            if cli.sample {
                let sample = MemorySource::sample(now, today);
                handle_accounts_command(&sample, &settings, account_type.as_deref(), command, now)?;
            } else {
                let storage = open_storage(&paths, true, false)?;
                handle_accounts_command(
                    &storage.accounts,
                    &settings,
                    account_type.as_deref(),
                    command,
                    now,
                )?;
            }
        }
        Some(Commands::Bills { filter, command }) => {
            if cli.sample {
                let sample = MemorySource::sample(now, today);
                handle_bills_command(&sample, &settings, filter.as_deref(), command, today)?;
            } else {
                let storage = open_storage(&paths, false, true)?;
                handle_bills_command(&storage.bills, &settings, filter.as_deref(), command, today)?;
            }
        }
        Some(Commands::Summary) => {
            if cli.sample {
                let sample = MemorySource::sample(now, today);
                handle_summary_command(&sample, &sample, &settings)?;
            } else {
                let storage = open_storage(&paths, true, true)?;
                handle_summary_command(&storage.accounts, &storage.bills, &settings)?;
            }
        }
        Some(Commands::Connect { account }) => {
            let storage = open_storage(&paths, true, false)?;
            handle_connect_command(&storage, &settings, &account, now, today)?;
        }
        Some(Commands::Pay { bill }) => {
            let storage = open_storage(&paths, false, true)?;
            handle_pay_command(&storage, &settings, &bill, now, today)?;
        }
        Some(Commands::Upload { file, account }) => {
            let storage = open_storage(&paths, true, false)?;
            storage.statements.load()?;
            handle_upload_command(&storage, &settings, file, account.as_deref(), now, today)?;
        }
        Some(Commands::Statements) => {
            let storage = open_storage(&paths, true, false)?;
            storage.statements.load()?;
            handle_statements_command(&storage, now)?;
        }
        Some(Commands::Export {
            output,
            format,
            entity,
        }) => {
            let storage = open_storage(&paths, true, true)?;
            storage.statements.load()?;
            handle_export_command(&storage, &output, format, entity, now)?;
        }
        Some(Commands::Audit { limit }) => {
            let storage = open_storage(&paths, false, false)?;
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("ledger-view Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Default currency: {}", settings.default_currency);
            println!("  Max upload size:  {} bytes", settings.max_upload_bytes);
        }
        None => {
            println!("ledger-view - accounts, net worth and bills in the terminal");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger init' to create a sample ledger.");
        }
    }

    Ok(())
}
