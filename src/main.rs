use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pennywise::config::{PennywisePaths, Settings};
use pennywise::console::Console;
use pennywise::models::{Currency, NegativeAmountPolicy};

#[derive(Parser)]
#[command(
    name = "pennywise",
    version,
    about = "Console personal finance tracker",
    long_about = "Pennywise records transactions in memory for the length of a \
                  session, lists and filters them by category, and totals any \
                  calendar month."
)]
struct Cli {
    /// Currency for entered amounts and reports (overrides settings)
    #[arg(long, global = true, env = "PENNYWISE_CURRENCY")]
    currency: Option<String>,

    /// Accept negative amounts for this session
    #[arg(long, global = true)]
    allow_negative: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive console (default)
    Console,

    /// Show configuration paths and settings
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PennywisePaths::new()?;
    let stored = Settings::load_or_create(&paths)?;
    let settings = with_overrides(&stored, &cli)?;

    pennywise::init_tracing(&settings.log_filter);

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout(), &settings);
            console.run()?;
        }
        Commands::Config { init } => {
            if init {
                // command-line overrides apply to this run only
                stored.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
            }
            println!("Pennywise Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Settings file:    {}", paths.settings_file().display());
            } else {
                println!(
                    "Settings file:    {} (not written, using defaults)",
                    paths.settings_file().display()
                );
            }
            println!();
            println!("Settings:");
            println!("  Default currency:   {}", settings.default_currency);
            println!("  Reporting currency: {}", settings.reporting_currency());
            println!("  Negative amounts:   {:?}", settings.negative_amounts);
            println!("  Log filter:         {}", settings.log_filter);
        }
    }

    Ok(())
}

fn with_overrides(stored: &Settings, cli: &Cli) -> Result<Settings> {
    let mut settings = stored.clone();
    if let Some(code) = &cli.currency {
        settings.set_currency(Currency::parse(code)?);
    }
    if cli.allow_negative {
        settings.negative_amounts = NegativeAmountPolicy::Allow;
    }
    Ok(settings)
}
