//! CLI argument definitions for the inventory cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inventory-cleaner",
    version,
    about = "Network inventory cleaner - validate and normalize device records",
    long_about = "Validate and normalize network inventory records.\n\n\
                  Canonicalizes IPv4, MAC, hostname, FQDN and site fields, extracts\n\
                  owner and device details, and reports per-record anomalies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw cell values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean an inventory CSV and write the clean table and anomaly report.
    Clean(CleanArgs),

    /// List every issue code per field.
    Codes,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Inventory CSV with ip, mac, site, hostname, fqdn, owner, device_type, notes.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for generated files (default: the input's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write the enriched table with every derived attribute.
    #[arg(long = "enriched")]
    pub enriched: bool,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 2 when any record has an anomaly.
    #[arg(long = "fail-on-anomalies")]
    pub fail_on_anomalies: bool,

    /// Worker threads for record cleaning (default: one per core).
    #[arg(long = "jobs", short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Accept `_` in hostname labels.
    #[arg(long = "hostname-allow-underscore")]
    pub hostname_allow_underscore: bool,

    /// Accept `_` in FQDN labels.
    #[arg(long = "fqdn-allow-underscore")]
    pub fqdn_allow_underscore: bool,

    /// Reject single-label FQDNs and all-numeric top-level labels.
    #[arg(long = "strict-fqdn")]
    pub strict_fqdn: bool,

    /// Skip owner/device extraction; those fields are reported as missing.
    #[arg(long = "no-extract")]
    pub no_extract: bool,

    /// Chat-completions API root.
    #[arg(
        long = "api-base",
        env = "OPENAI_BASE_URL",
        value_name = "URL",
        default_value = inv_extract::config::DEFAULT_BASE_URL
    )]
    pub api_base: String,

    /// Model used for owner/device extraction.
    #[arg(
        long = "model",
        env = "OPENAI_MODEL",
        default_value = inv_extract::config::DEFAULT_MODEL
    )]
    pub model: String,

    /// Per-request timeout for extraction calls, in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Retries for failed extraction calls.
    #[arg(long = "max-retries", value_name = "N", default_value_t = 2)]
    pub max_retries: u32,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
