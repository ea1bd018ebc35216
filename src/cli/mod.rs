use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::{AppError, parse_argument, parse_commands};
use crate::domain::{Account, amount_from_value, format_amount};

/// Purse - a single customer account
#[derive(Parser)]
#[command(name = "purse")]
#[command(about = "Open a customer account and replay balance operations against it")]
#[command(version)]
pub struct Cli {
    /// Customer name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Initial balance (e.g. "250.53"); the balance stays unset when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub balance: Option<String>,

    /// Print the final account as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Operations to run in order: set-balance [AMOUNT] | withdraw AMOUNT | deposit AMOUNT
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub operations: Vec<String>,
}

impl Cli {
    fn init_tracing(&self) {
        let filter = if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        // Ignore the error when a subscriber is already installed
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn open_account(&self) -> Result<Account> {
        let mut builder = Account::builder();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(balance) = &self.balance {
            let amount = parse_argument(balance)
                .and_then(|value| amount_from_value(&value))
                .with_context(|| format!("invalid initial balance '{}'", balance))?;
            builder = builder.balance(amount);
        }
        Ok(builder.build()?)
    }

    pub fn run(self) -> Result<()> {
        self.init_tracing();

        let mut account = self.open_account()?;
        info!(account = %account.id, name = %account.name, "account opened");
        println!("Account: {}", account.name);

        let commands = parse_commands(self.operations.as_slice())?;
        for command in &commands {
            let balance = command
                .execute(&mut account)
                .with_context(|| format!("operation '{}' failed", command))?;
            println!("  {:<24} balance {}", command.to_string(), format_amount(balance));
        }

        match account.balance {
            Some(balance) => println!("Balance: {}", format_amount(balance)),
            None => println!("Balance: (not set)"),
        }

        if self.json {
            let snapshot = serde_json::to_string_pretty(&account).map_err(AppError::from)?;
            println!("{}", snapshot);
        }

        Ok(())
    }
}
