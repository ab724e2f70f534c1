use clap::{Parser, Subcommand};

use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Terminal weather display")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the weather for a location once and exit.
    Show {
        /// City name or "lat,lon" pair. The configured default location when omitted.
        location: Option<String>,

        /// Display temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Interactive session: search locations, toggle units.
    Interactive,

    /// Choose the API environment and the default location.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Show {
                location,
                fahrenheit,
            }) => session::show(location, fahrenheit).await,
            Some(Command::Interactive) | None => session::interactive().await,
            Some(Command::Configure) => session::configure(),
        }
    }
}
