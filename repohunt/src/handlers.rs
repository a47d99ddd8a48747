use clap::ArgMatches;
use colored::Colorize;
use repohunt_core::{
    ScrapeError, ScrapeInput, ScrapeOptions, ScrapeOutcome, ScrapeProgressCallback,
    execute_scrape, write_output,
};
use repohunt_scanner::{DEFAULT_BASE_URL, EnrichFailurePolicy};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Log to stderr, filtered by RUST_LOG (default: warnings only)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Expand a leading `~` in a user supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Both the input and the output file are mandatory
pub fn resolve_file_arguments(args: &ArgMatches) -> Result<(PathBuf, PathBuf), ScrapeError> {
    let input = args.get_one::<String>("ifile");
    let output = args.get_one::<String>("ofile");

    match (input, output) {
        (Some(input), Some(output)) if !input.is_empty() && !output.is_empty() => {
            Ok((expand_path(input), expand_path(output)))
        }
        _ => Err(ScrapeError::MissingFileArguments),
    }
}

pub fn failure_policy(args: &ArgMatches) -> EnrichFailurePolicy {
    if args.get_flag("skip-failed") {
        EnrichFailurePolicy::Skip
    } else {
        EnrichFailurePolicy::Abort
    }
}

pub fn build_scrape_options(args: &ArgMatches, input: ScrapeInput) -> ScrapeOptions {
    let base_url = args
        .get_one::<Url>("base-url")
        .map(|url| url.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ScrapeOptions {
        input,
        base_url,
        failure_policy: failure_policy(args),
        show_progress_bars: !args.get_flag("quiet"),
    }
}

/// Read the input file, run the search and write the output file
pub async fn handle_scrape(args: &ArgMatches) -> Result<ScrapeOutcome, ScrapeError> {
    let quiet = args.get_flag("quiet");
    let (input_path, output_path) = resolve_file_arguments(args)?;

    let input = ScrapeInput::from_file(&input_path)?;
    info!(
        "Loaded {} keywords and {} proxies from {}",
        input.request.keywords().len(),
        input.proxies.len(),
        input_path.display()
    );

    let progress_callback: Option<ScrapeProgressCallback> = if quiet {
        None
    } else {
        Some(Arc::new(|msg: String| {
            println!("{} {}", "→".blue(), msg);
        }))
    };

    let outcome = execute_scrape(build_scrape_options(args, input), progress_callback).await?;

    write_output(&outcome.records, &output_path)?;
    info!(
        "Wrote {} results to {}",
        outcome.records.len(),
        output_path.display()
    );

    Ok(outcome)
}
