//! deck-draw - shuffle a deck on the public Deck of Cards service, draw a
//! handful of cards and print them from ace to king.

use std::num::NonZeroU32;
use std::process::ExitCode;

use clap::Parser;
use deck_draw::{exit_code, CardSession, HttpCardProvider, ProviderConfig, DEFAULT_CARD_COUNT};
use tracing::debug;

mod telemetry;

#[derive(Parser)]
#[command(name = "deck-draw")]
#[command(about = "Draw cards from the Deck of Cards API and print them sorted by rank")]
struct Args {
    /// Number of cards to draw
    #[arg(short, long, default_value_t = DEFAULT_CARD_COUNT)]
    count: NonZeroU32,

    /// Deck service base URL (overrides DECK_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides DECK_API_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Exit with status 1 when the run fails instead of always exiting 0
    #[arg(long)]
    strict_exit: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    let config = match ProviderConfig::from_env()
        .and_then(|c| c.with_overrides(args.base_url.as_deref(), args.timeout_secs))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(base_url = %config.base_url, timeout = ?config.timeout, "provider configured");

    let provider = match HttpCardProvider::new(&config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let session = CardSession::new(provider, args.count, std::io::stdout().lock());
    let result = session.run().await;
    match &result {
        Ok(summary) => {
            debug!(drawn = summary.drawn, rendered = summary.rendered, "run complete")
        }
        // The failure line has already been printed by the session.
        Err(e) => debug!(error = %e, strict_exit = args.strict_exit, "run failed"),
    }
    exit_code(&result, args.strict_exit)
}
