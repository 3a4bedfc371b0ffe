use anyhow::Context;
use clap::{Parser, Subcommand};
use pedichart_core::events::load_script;
use pedichart_core::forms::catalog;
use pedichart_core::{ChartSession, ClipboardBackend, Condition, CopyOutcome, CoreConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pedichart")]
#[command(about = "Pediatric chart drafting CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Say hi
    Hi,
    /// List the fields and symptoms of each form
    Fields {
        /// Only this condition (key or Korean label)
        #[arg(long)]
        condition: Option<Condition>,
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a YAML list of form events and print the resulting note
    Replay {
        /// Path to the event script
        file: PathBuf,
        /// Copy the note to the configured clipboard afterwards
        #[arg(long)]
        copy: bool,
    },
}

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

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Hi) => {
            println!("hi");
        }
        Some(Commands::Fields { condition, json }) => {
            println!("{}", fields(condition, json)?);
        }
        Some(Commands::Replay { file, copy }) => {
            let config = CoreConfig::from_env_values(
                std::env::var(pedichart_core::constants::CLIPBOARD_CMD_ENV).ok(),
                std::env::var(pedichart_core::constants::CLIPBOARD_TIMEOUT_ENV).ok(),
            )?;
            replay(&file, copy, ClipboardBackend::from_config(&config)).await?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn fields(condition: Option<Condition>, json: bool) -> anyhow::Result<String> {
    let conditions = match condition {
        Some(c) => vec![c],
        None => Condition::ALL.to_vec(),
    };
    let catalogs: Vec<_> = conditions.into_iter().map(catalog).collect();

    if json {
        return Ok(serde_json::to_string_pretty(&catalogs)?);
    }
    Ok(catalogs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

async fn replay(path: &Path, copy: bool, clipboard: ClipboardBackend) -> anyhow::Result<()> {
    let events = load_script(path)
        .with_context(|| format!("failed to load replay script {}", path.display()))?;
    tracing::info!(events = events.len(), clipboard = %clipboard.describe(), "replaying script");

    let mut session = ChartSession::new(clipboard);
    for (index, event) in events.into_iter().enumerate() {
        session
            .apply(event)
            .with_context(|| format!("event {} rejected", index + 1))?;
    }

    println!("{}", session.note());

    if copy {
        match session.copy().await {
            CopyOutcome::Copied => eprintln!("{}", session.copy_label()),
            CopyOutcome::Skipped => eprintln!("Note is empty; nothing copied."),
            CopyOutcome::Failed => anyhow::bail!("could not copy the note to the clipboard"),
        }
    }

    Ok(())
}
