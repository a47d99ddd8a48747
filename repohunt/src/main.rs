use colored::Colorize;
use repohunt::{command_argument_builder, handle_scrape, init_tracing};
use repohunt_core::ScrapeError;

#[tokio::main]
async fn main() {
    let mut cmd = command_argument_builder();
    let matches = cmd.get_matches_mut();
    let quiet = matches.get_flag("quiet");

    init_tracing();

    match handle_scrape(&matches).await {
        Ok(outcome) => {
            if !quiet {
                let enriched = outcome
                    .enrichment
                    .map(|summary| format!(", {} enriched", summary.enriched))
                    .unwrap_or_default();
                println!(
                    "{} Done! {} results{}",
                    "✓".green().bold(),
                    outcome.records.len(),
                    enriched
                );
            }
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            if matches!(e, ScrapeError::MissingFileArguments) {
                eprintln!("{}", cmd.render_usage());
            }
            std::process::exit(e.exit_code());
        }
    }
}
