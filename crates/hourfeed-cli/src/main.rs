mod report;
mod run;

use clap::{Parser, Subcommand};
use hourfeed_store::FileRunLog;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hourfeed-cli")]
#[command(about = "Archive a news feed into hourly JSON files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the feed and append unseen entries to this hour's file (default)
    Run {
        /// Report what would be written without creating the hourly file
        #[arg(long)]
        dry_run: bool,
    },
    /// List the entries already recorded today before the current hour
    Index {
        /// Print one JSON object per entry instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = hourfeed_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let now = || chrono::Local::now().naive_local();

    match cli.command {
        None | Some(Commands::Run { dry_run: false }) => {
            let log = FileRunLog::new(config.log_path());
            let summary = run::run_once(&config, now, &log).await?;
            println!(
                "wrote {} new entries to {} ({} already recorded today)",
                summary.items_written,
                summary.path.display(),
                summary.duplicates_skipped
            );
        }
        Some(Commands::Run { dry_run: true }) => {
            let plan = run::dry_run(&config, now).await?;
            println!(
                "dry-run: would write {} of {} entries to {}",
                plan.new_entries.len(),
                plan.fetched,
                plan.path.display()
            );
            if plan.file_exists {
                println!(
                "dry-run: {} already exists; a real run would fail",
                plan.path.display()
            );
            }
            for entry in &plan.new_entries {
                println!("  {} | {}", entry.publish_date, entry.title);
            }
        }
        Some(Commands::Index { json }) => report::print_index(&config, now(), json)?,
    }

    Ok(())
}
