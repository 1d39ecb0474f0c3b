use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ConfigOverrides;
use crate::response::{Beverage, Companion, Dietary, Guest};

/// rsvp: RSVP for Henrique's birthday barbecue
#[derive(Parser, Debug)]
#[command(name = "rsvp")]
#[command(version)]
#[command(about = "RSVP for Henrique's birthday barbecue")]
#[command(
    long_about = "Pick your name, company, drink and barbecue preference in a short terminal wizard; the answers are sent to the party organizer's spreadsheet."
)]
pub struct Cli {
    /// Configuration file (defaults to config.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the submission endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Set log level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive RSVP wizard (default)
    Form {
        /// Skip balloons, fish, beer and confetti
        #[arg(long)]
        no_animations: bool,

        /// Never ring the terminal bell
        #[arg(long)]
        mute: bool,
    },

    /// Send an RSVP without the interactive screens
    Submit {
        /// Guest name as shown on the balloons
        #[arg(long)]
        name: Guest,

        /// sozinho, homi or muie
        #[arg(long)]
        companion: Companion,

        /// rachar or eu_pago
        #[arg(long)]
        beverage: Beverage,

        /// normal, restricoes or linguica
        #[arg(long)]
        dietary: Dietary,
    },

    /// Add the party to a calendar
    Calendar {
        #[command(subcommand)]
        target: CalendarTarget,
    },

    /// Where the barbecue is, on Google Maps
    Map {
        /// Open the map in the browser instead of printing the link
        #[arg(long)]
        open: bool,
    },

    /// Ask Henrique a question on WhatsApp
    Contact {
        /// Open the link in the browser instead of printing it
        #[arg(long)]
        open: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CalendarTarget {
    /// Google Calendar link
    Google {
        /// Open the link in the browser instead of printing it
        #[arg(long)]
        open: bool,
    },

    /// iCalendar file for Apple Calendar, Outlook and friends
    Ics {
        /// Directory to write into (defaults to the configured download directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// The wizard runs when no subcommand is given
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Form {
            no_animations: false,
            mute: false,
        })
    }

    /// Command line values that win over the configuration file
    pub fn overrides(&self) -> ConfigOverrides {
        let (no_animations, mute) = match &self.command {
            Some(Commands::Form { no_animations, mute }) => (*no_animations, *mute),
            _ => (false, false),
        };
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            no_animations,
            mute,
        }
    }
}
