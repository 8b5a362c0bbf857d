use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Address lookup arguments
#[derive(Args, Debug)]
pub struct AddressArgs {
    /// 7-digit postal code without hyphen (e.g. 1008105)
    pub postal_code: String,
}

/// City lookup arguments
#[derive(Args, Debug)]
pub struct CityArgs {
    /// 2-digit prefecture code (JIS X 0401, e.g. 13)
    pub prefecture_code: String,
}

/// Corporation lookup arguments
#[derive(Args, Debug)]
pub struct CorporationArgs {
    /// 13-digit corporate number
    pub corporate_number: String,
}

/// Holiday listing arguments
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Only holidays of this year
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    pub year: Option<i32>,

    /// Start of the period (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// End of the period (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,
}

/// Address normalization arguments
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Free-text address; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub address: Vec<String>,
}

impl NormalizeArgs {
    pub fn text(&self) -> String {
        self.address.join(" ")
    }
}

/// Business day check arguments
#[derive(Args, Debug)]
pub struct BusinessDayArgs {
    /// Date to check (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Configuration command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key (api.token, api.endpoint, api.timeout)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// Initialize configuration
    Init,
}
