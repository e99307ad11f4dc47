use clap::Parser;
use notifier::cli::Cli;
use notifier::logging::{self, LogConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let guard = logging::init(&LogConfig::from_env().with_verbosity(cli.verbose));

    if let Err(e) = notifier::commands::run(cli).await {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        // Flush the log file before exiting
        drop(guard);
        std::process::exit(1);
    }
}
