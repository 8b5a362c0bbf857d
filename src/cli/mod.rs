pub mod args;
pub mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::error::Result;

/// Postal code, address and corporate number lookups from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "kenall",
    about = "Look up Japanese postal codes, addresses, corporations and holidays",
    version,
    author,
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Override the API endpoint
    #[arg(long, global = true, env = "KENALL_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up addresses by postal code (郵便番号)
    #[command(alias = "a")]
    Address(args::AddressArgs),

    /// List the cities of a prefecture (市区町村)
    #[command(alias = "c")]
    City(args::CityArgs),

    /// Look up a corporation by corporate number (法人番号)
    #[command(alias = "houjin")]
    Corporation(args::CorporationArgs),

    /// Show the address the service sees you connecting from
    Whoami,

    /// List national holidays (祝日)
    Holidays(args::HolidaysArgs),

    /// Split a free-text address into its components
    #[command(alias = "n")]
    Normalize(args::NormalizeArgs),

    /// Check whether a date is a business day (営業日)
    #[command(alias = "bd")]
    BusinessDay(args::BusinessDayArgs),

    /// Manage configuration
    Config(args::ConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completion scripts
    fn generate_completions(shell: Shell) {
        use clap::CommandFactory;
        use clap_complete::generate;
        use std::io;

        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
    }

    /// Run the CLI application
    pub async fn run() -> Result<()> {
        let cli = Self::parse();

        // Set up logging
        let level = if cli.verbose { "debug" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

        let result = cli.dispatch().await;

        if let Err(e) = &result {
            eprintln!("Error: {}", e);
            if cli.verbose {
                if let Some(source) = std::error::Error::source(e) {
                    eprintln!("Caused by: {}", source);
                }
            }
            if let Some(hint) = e.hint() {
                eprintln!("\nHint: {}", hint);
            }
        }

        result
    }

    async fn dispatch(&self) -> Result<()> {
        let output = match &self.command {
            Commands::Config(args) => return commands::config::execute(args),
            Commands::Version => {
                commands::version::execute();
                return Ok(());
            }
            Commands::Completions { shell } => {
                Self::generate_completions(*shell);
                return Ok(());
            }
            Commands::Address(args) => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::address::execute(&client, args, self.format).await?
            }
            Commands::City(args) => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::city::execute(&client, args, self.format).await?
            }
            Commands::Corporation(args) => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::corporation::execute(&client, args, self.format).await?
            }
            Commands::Whoami => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::whoami::execute(&client, self.format).await?
            }
            Commands::Holidays(args) => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::holidays::execute(&client, args, self.format).await?
            }
            Commands::Normalize(args) => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::normalize::execute(&client, args, self.format).await?
            }
            Commands::BusinessDay(args) => {
                let client = commands::create_client(self.endpoint.as_deref(), self.timeout)?;
                commands::business_day::execute(&client, args, self.format).await?
            }
        };

        println!("{}", output);
        Ok(())
    }
}
