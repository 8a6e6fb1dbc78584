use clap::Parser;
use tokio::runtime::Runtime;

use ctrf_teams::cli::{Cli, Commands};
use ctrf_teams::ctrf::parse_file;
use ctrf_teams::formatter::failed_tests_digest;
use ctrf_teams::reporter::{send_ai_summaries, send_flaky, send_results, Options};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rt = Runtime::new()?;
    rt.block_on(async {
        let result = match cli.command {
            Commands::Results { path, on_fail_only } => {
                let options = Options {
                    on_fail_only,
                    ..Default::default()
                };
                match parse_file(&path) {
                    Ok(report) => send_results(&report, &options).await,
                    Err(e) => Err(e),
                }
            }
            Commands::FailDetails { path } => parse_file(&path).map(|report| {
                println!("{}", failed_tests_digest(&report));
            }),
            Commands::Flaky { path } => match parse_file(&path) {
                Ok(report) => send_flaky(&report, &Options::default()).await,
                Err(e) => Err(e),
            },
            Commands::Ai { path } => match parse_file(&path) {
                Ok(report) => send_ai_summaries(&report, &Options::default()).await,
                Err(e) => Err(e),
            },
        };

        // Commands report their own failures; the process still exits 0.
        if let Err(e) = result {
            eprintln!("Error: {e}");
        }
    });

    Ok(())
}
