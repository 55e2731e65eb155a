use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tally::application::{init::init, ConfigService};
use tally::cli::input::{parse_amount_input, parse_optional_amount, parse_optional_date};
use tally::cli::{format_balance, format_record_list, Cli, Commands, Shell};
use tally::domain::{Record, SearchFilter};
use tally::error::LedgerError;
use tally::infrastructure::{Config, FileLedgerStore, LedgerRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "tally=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), LedgerError> {
    let current_dir = std::env::current_dir()?;
    let file = cli.file.as_deref();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Config { key, value, list } => {
            manage_config(ConfigService::new(current_dir), key, value, list)
        }
        Commands::Init => {
            init(&ledger_path(&current_dir, file)?)?;
            Ok(())
        }
        Commands::Add {
            date,
            category,
            amount,
            description,
        } => {
            let store = open_store(&current_dir, file)?;
            let amount = parse_amount_input(&amount)?;
            store.add_record(&Record::new(date, category, amount, description))?;
            println!("Record added.");
            Ok(())
        }
        Commands::Balance => {
            let store = open_store(&current_dir, file)?;
            let balance = store.get_balance()?;
            print!("{}", format_balance(&balance));
            Ok(())
        }
        Commands::List => {
            let store = open_store(&current_dir, file)?;
            let records = store.list_records()?;
            println!("{}", format_record_list(&records).trim_end());
            Ok(())
        }
        Commands::Search {
            category,
            from,
            to,
            min,
            max,
        } => {
            let filter = SearchFilter {
                category,
                start_date: parse_optional_date(from.as_deref().unwrap_or_default())?,
                end_date: parse_optional_date(to.as_deref().unwrap_or_default())?,
                min_amount: parse_optional_amount(min.as_deref().unwrap_or_default())?,
                max_amount: parse_optional_amount(max.as_deref().unwrap_or_default())?,
            };
            let store = open_store(&current_dir, file)?;
            let records = store.search_records(&filter)?;
            println!("{}", format_record_list(&records).trim_end());
            Ok(())
        }
        Commands::Edit {
            date,
            category,
            amount,
            description,
            new_date,
            new_category,
            new_amount,
            new_description,
        } => {
            let amount = parse_amount_input(&amount)?;
            let new_amount = match new_amount {
                Some(a) => parse_amount_input(&a)?,
                None => amount,
            };
            let new = Record::new(
                new_date.unwrap_or_else(|| date.clone()),
                new_category.unwrap_or_else(|| category.clone()),
                new_amount,
                new_description.unwrap_or_else(|| description.clone()),
            );
            let old = Record::new(date, category, amount, description);

            let store = open_store(&current_dir, file)?;
            if store.edit_record(&old, &new) {
                println!("Record updated.");
                Ok(())
            } else {
                Err(LedgerError::RecordNotFound(format!(
                    "{} {} {} {}",
                    old.date,
                    old.category,
                    old.amount_text(),
                    old.description
                )))
            }
        }
        Commands::Shell => {
            let store = open_store(&current_dir, file)?;
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Shell::new(&store, stdin.lock(), stdout.lock()).run()
        }
    }
}

/// Resolve the ledger file from the --file flag or tally.toml
fn ledger_path(dir: &Path, file: Option<&Path>) -> Result<PathBuf, LedgerError> {
    let config = Config::load_from_dir(dir)?;
    Ok(config.ledger_path(dir, file))
}

fn open_store(dir: &Path, file: Option<&Path>) -> Result<FileLedgerStore, LedgerError> {
    FileLedgerStore::open(ledger_path(dir, file)?)
}

fn manage_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<(), LedgerError> {
    if list {
        let config = service.list()?;
        println!("file = {}", config.file.display());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
            Ok(())
        } else {
            let val = service.get(&k)?;
            println!("{}", val);
            Ok(())
        }
    } else {
        println!("Usage: tally config [--list | <key> [<value>]]");
        println!("Valid keys: file");
        Ok(())
    }
}
