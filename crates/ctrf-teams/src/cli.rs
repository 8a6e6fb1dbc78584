use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ctrf-teams – post CTRF test reports to a Microsoft Teams webhook
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a test results summary to Teams
    Results {
        /// Path to the CTRF report file
        path: PathBuf,

        /// Send the message only if there are failed tests
        #[arg(short = 'f', long = "onFailOnly")]
        on_fail_only: bool,
    },
    /// Print a plain-text digest of failed tests
    FailDetails {
        /// Path to the CTRF report file
        path: PathBuf,
    },
    /// Send a flaky test report to Teams
    Flaky {
        /// Path to the CTRF report file
        path: PathBuf,
    },
    /// Send AI failure summaries to Teams, one message per failed test
    Ai {
        /// Path to the CTRF report file
        path: PathBuf,
    },
}
