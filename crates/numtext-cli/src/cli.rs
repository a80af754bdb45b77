//! CLI argument definitions for numtext.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "numtext",
    version,
    about = "Format and parse human-readable numbers and durations",
    long_about = "Format and parse human-readable numbers and durations.\n\n\
                  Groups digits (1,000,000), abbreviates magnitudes (1.5M) and\n\
                  converts between seconds and duration text (1h 5m 10s, 01:05:10)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file with grouping, abbreviation, suffix and template settings.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Group the integer digits of a number (1000000 -> 1,000,000).
    Comma(CommaArgs),

    /// Abbreviate a number with its magnitude suffix (1500000 -> 1.5M).
    Abbreviate(AbbreviateArgs),

    /// Parse an abbreviated number back into a value (1.5M -> 1500000).
    Parse(ParseArgs),

    /// Convert duration text into seconds (1d 2h -> 93600).
    Seconds(SecondsArgs),

    /// Format seconds as short duration text (3910 -> 1h 5m 10s).
    Remaining(RemainingArgs),

    /// Format seconds as HH:MM:SS (3910 -> 01:05:10).
    Clock(ClockArgs),

    /// List the active suffix table.
    Suffixes(SuffixesArgs),

    /// List the accepted time-unit literals.
    Units,
}

impl Command {
    /// Subcommand name, for log spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Comma(_) => "comma",
            Self::Abbreviate(_) => "abbreviate",
            Self::Parse(_) => "parse",
            Self::Seconds(_) => "seconds",
            Self::Remaining(_) => "remaining",
            Self::Clock(_) => "clock",
            Self::Suffixes(_) => "suffixes",
            Self::Units => "units",
        }
    }
}

#[derive(Args, Default)]
pub struct CommaArgs {
    /// Number to group, as written (sign and fraction are kept).
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Return the value ungrouped when it is below this number.
    #[arg(long = "minimum", value_name = "N")]
    pub minimum: Option<f64>,

    /// Digit-group separator (default: ",").
    #[arg(long = "separator", value_name = "SEP")]
    pub separator: Option<String>,

    /// Decimal separator (default: ".").
    #[arg(long = "decimal", value_name = "CHAR")]
    pub decimal: Option<char>,
}

#[derive(Args, Default)]
pub struct AbbreviateArgs {
    /// Number to abbreviate.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Smallest value that gets abbreviated (default: 1000).
    #[arg(long = "threshold", value_name = "N", allow_hyphen_values = true)]
    pub threshold: Option<f64>,

    /// Comma-separated suffix tags in tier order (default: built-in table).
    #[arg(long = "suffixes", value_name = "TAGS", value_delimiter = ',')]
    pub suffixes: Option<Vec<String>>,
}

#[derive(Args, Default)]
pub struct ParseArgs {
    /// Abbreviated number such as 1.5M or 100k.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Comma-separated suffix tags in tier order (default: built-in table).
    #[arg(long = "suffixes", value_name = "TAGS", value_delimiter = ',')]
    pub suffixes: Option<Vec<String>>,
}

#[derive(Args, Default)]
pub struct SecondsArgs {
    /// Duration text; several words are joined with spaces (1d 2h 3m).
    #[arg(value_name = "TEXT", required = true, num_args = 1.., allow_hyphen_values = true)]
    pub text: Vec<String>,
}

#[derive(Args, Default)]
pub struct RemainingArgs {
    /// Duration in whole seconds.
    #[arg(value_name = "SECONDS")]
    pub seconds: u64,

    /// Template for seconds, with a %d placeholder (default: "%ds").
    #[arg(long = "seconds-format", value_name = "TEMPLATE")]
    pub seconds_format: Option<String>,

    /// Template for minutes (default: "%dm").
    #[arg(long = "minutes-format", value_name = "TEMPLATE")]
    pub minutes_format: Option<String>,

    /// Template for hours (default: "%dh").
    #[arg(long = "hours-format", value_name = "TEMPLATE")]
    pub hours_format: Option<String>,

    /// Template for days (default: "%dd").
    #[arg(long = "days-format", value_name = "TEMPLATE")]
    pub days_format: Option<String>,
}

#[derive(Args, Default)]
pub struct ClockArgs {
    /// Duration in whole seconds.
    #[arg(value_name = "SECONDS")]
    pub seconds: u64,
}

#[derive(Args, Default)]
pub struct SuffixesArgs {
    /// Comma-separated suffix tags to list instead of the configured table.
    #[arg(long = "suffixes", value_name = "TAGS", value_delimiter = ',')]
    pub suffixes: Option<Vec<String>>,
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
