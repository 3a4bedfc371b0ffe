use pedichart_core::constants::{CLIPBOARD_CMD_ENV, CLIPBOARD_TIMEOUT_ENV};
use pedichart_core::{ChartSession, ClipboardBackend, CoreConfig};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod repl;

use repl::{HELP, Repl};

/// Main entry point for the pedichart drafting session
///
/// Reads commands from stdin and writes the note to stdout. Logs go to stderr so that stdout
/// only ever carries the note and command replies.
///
/// # Environment Variables
/// - `PEDICHART_CLIPBOARD_CMD`: program (and arguments) the note is piped into on copy,
///   e.g. `wl-copy` or `xclip -selection clipboard`. Unset keeps copies in memory.
/// - `PEDICHART_CLIPBOARD_TIMEOUT_MS`: how long a clipboard write may take (default: 3000)
/// - `RUST_LOG`: log filter (default directive: `pedichart=info`)
///
/// # Returns
/// * `Ok(())` - On `quit` or end of input
/// * `Err(anyhow::Error)` - If configuration is invalid or stdin/stdout fail
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pedichart=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CoreConfig::from_env_values(
        std::env::var(CLIPBOARD_CMD_ENV).ok(),
        std::env::var(CLIPBOARD_TIMEOUT_ENV).ok(),
    )?;
    let clipboard = ClipboardBackend::from_config(&config);
    tracing::info!("++ Starting pedichart session, clipboard: {}", clipboard.describe());

    eprintln!("{HELP}");

    let mut repl = Repl::new(ChartSession::new(clipboard));
    repl.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    tracing::info!("session closed");
    Ok(())
}
