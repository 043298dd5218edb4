mod composer;
mod config;
mod core;
mod history;
mod keywords;
mod ranker;
mod recommend;
mod scorer;
mod search;
mod sources;
mod ui;

use crate::composer::FALLBACK_MESSAGE;
use crate::config::ConfigManager;
use crate::history::HistoryStore;
use crate::recommend::Recommender;
use crate::search::SearchEngine;
use crate::sources::CatalogSource;
use crate::ui::{
    create_spinner, log_error, log_success, log_warn, print_banner, print_history,
    print_recommendation, print_search_results,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::exit;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "curator")]
struct Cli {
    /// Data directory holding config, catalog and history
    #[arg(long, env = "CURATOR_ROOT", default_value = "/var/lib/curator", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Recommend {
        query: String,
        /// Preference tag, may be repeated
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    Search {
        query: String,
    },
    Update,
    History {
        #[arg(long, default_value_t = 10)]
        limit: i64,
        #[arg(long, action)]
        clear: bool,
    },
    Config {
        #[arg(long)]
        set_repo: Option<String>,
        #[arg(long, action = ArgAction::Set)]
        history: Option<bool>,
        #[arg(long, action)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    print_banner();
    if let Err(e) = run().await {
        log_error(&e.to_string());
        exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = cli.root;
    if !root.exists() {
        std::fs::create_dir_all(&root)?;
    }

    let config_manager = ConfigManager::new(&root);
    let mut config = config_manager.load().await?;

    let source = CatalogSource::new(root.join("catalog"), config.repo_url.clone());
    let history_url = format!("sqlite://{}/history.db?mode=rwc", root.display());

    match cli.command {
        Commands::Recommend { query, tags } => {
            let spinner = create_spinner("Loading catalog...");
            let loaded = source.load();
            spinner.finish_and_clear();

            let catalog = match loaded {
                Ok(catalog) => catalog,
                Err(e) => {
                    warn!(error = %e, "catalog unavailable");
                    log_warn(&e.to_string());
                    println!("{}", FALLBACK_MESSAGE);
                    return Ok(());
                }
            };

            let rec = Recommender::recommend(&query, &tags, &catalog.items);
            print_recommendation(&rec);

            if config.record_history {
                let store = HistoryStore::new(&history_url).await?;
                store
                    .record(&query, &catalog.digest, &rec.keywords, &rec.items)
                    .await?;
            }
        }
        Commands::Search { query } => {
            let catalog = source.load()?;
            let results = SearchEngine::search(&query, &catalog.items);
            print_search_results(&query, &results);
        }
        Commands::Update => {
            println!("Syncing catalog from: {}", config.repo_url);
            source.sync()?;
            let catalog = source.load()?;
            log_success(&format!(
                "Catalog updated ({} items).",
                catalog.items.len()
            ));
        }
        Commands::History { limit, clear } => {
            let store = HistoryStore::new(&history_url).await?;
            if clear {
                store.clear().await?;
                log_success("Search history cleared.");
            } else {
                let entries = store.recent(limit).await?;
                let top = store.top_keywords(5).await?;
                print_history(&entries, &top);
            }
        }
        Commands::Config {
            set_repo,
            history,
            show,
        } => {
            if set_repo.is_none() && history.is_none() {
                if show {
                    println!("Current Configuration:");
                    println!("   Repo URL: {}", config.repo_url);
                    println!("   Record history: {}", config.record_history);
                } else {
                    println!("Use --show, --set-repo <URL> or --history <true|false>");
                }
                return Ok(());
            }

            if let Some(url) = set_repo {
                config.repo_url = url.clone();
                log_success(&format!("Catalog URL updated to: {}", url));
            }
            if let Some(enabled) = history {
                config.record_history = enabled;
                log_success(&format!("History recording set to: {}", enabled));
            }
            config_manager.save(&config).await?;
        }
    }

    Ok(())
}
