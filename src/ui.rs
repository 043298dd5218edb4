use crate::core::CatalogItem;
use crate::history::HistoryEntry;
use crate::recommend::Recommendation;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub fn print_banner() {
    println!();
    println!(
        "   {}  {}",
        "CURATOR".magenta().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("   {}", "Style & Sound Recommendations".white());
    println!();
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn print_recommendation(rec: &Recommendation<'_>) {
    println!("{}", "RECOMMENDATIONS".bold().underline());
    println!("{}", rec.message);
    println!();
    println!(
        "{} {:.2}",
        "confidence:".dimmed(),
        rec.confidence
    );
    println!();
}

pub fn print_search_results(query: &str, results: &[(i64, &CatalogItem)]) {
    println!("{}", "SEARCH RESULTS".bold().underline());
    if results.is_empty() {
        println!("No products found matching '{}'", query);
    } else {
        for (_, item) in results {
            println!(
                "{} - {} ({}, ${:.2})",
                item.name.green().bold(),
                item.description,
                item.category,
                item.price
            );
        }
    }
    println!();
}

pub fn print_history(entries: &[HistoryEntry], top: &[(String, i64)]) {
    println!("{}", "RECENT SEARCHES".bold().underline());
    if entries.is_empty() {
        println!("No searches recorded yet.");
    }
    for entry in entries {
        let results: Vec<&str> = entry.results.iter().map(|r| r.0.as_str()).collect();
        println!(
            "   #{} {} [{}] -> {}",
            entry.id,
            entry.query.cyan(),
            entry.keywords.join(", ").dimmed(),
            if results.is_empty() {
                "no match".to_string()
            } else {
                results.join(", ")
            }
        );
    }

    if !top.is_empty() {
        println!();
        println!("{}", "FREQUENT INTERESTS".bold().underline());
        for (keyword, hits) in top {
            println!("   {} ({})", keyword.green(), hits);
        }
    }
    println!();
}

pub fn log_error(msg: &str) {
    println!("{} {}", "✖ Error:".red().bold(), msg);
}

pub fn log_warn(msg: &str) {
    println!("{} {}", "! Warning:".yellow().bold(), msg);
}

pub fn log_success(msg: &str) {
    println!("{} {}", "✔ Success:".green().bold(), msg);
}
