use clap::{Parser, Subcommand};

/// CLI arguments for regform-cli
#[derive(Debug, Parser)]
#[command(
    name = "regform",
    version,
    about = "CLI for exercising the regform-core registration form models"
)]
pub struct CliArgs {
    /// Remote country endpoint (default: the restcountries v3.1 URL)
    #[arg(short = 'e', long = "endpoint", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds for the remote endpoint
    #[arg(short = 't', long = "timeout", global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Populate the country control the way the registration page does
    /// (remote list, degrading to the static fallback on any failure)
    Countries,

    /// Fetch from the remote source and fail loudly on any error
    Fetch,

    /// Print the static fallback table
    Fallback,

    /// Validate a date of birth against today's date
    CheckDob {
        /// Date in YYYY-MM-DD form
        date: String,
    },
}
