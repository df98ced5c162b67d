use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use weekcal::render::Format;
use weekcal::time::{Dutch, English, Locale};

/// Generate a week calendar for an entire year.
#[derive(Parser, Debug)]
#[command(
    name = "weekcal",
    version,
    about = "Generate a week calendar with holidays, birthdays and anniversaries"
)]
pub struct Cli {
    /// Path to the YAML configuration file.
    pub config: PathBuf,

    /// Year to generate; overrides `year` from the configuration.
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Output path (`-` for stdout). Defaults to `calendar-{year}.{ext}`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Language of month, weekday and holiday names.
    #[arg(short, long, value_enum, default_value_t = Language::Nl)]
    pub language: Language,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// Dutch.
    Nl,
    /// English.
    En,
}

impl Language {
    pub fn locale(self) -> &'static dyn Locale {
        match self {
            Language::Nl => &Dutch,
            Language::En => &English,
        }
    }
}
