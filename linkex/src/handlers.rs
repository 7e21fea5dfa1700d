use clap::ArgMatches;
use colored::Colorize;
use linkex_core::{BarProgress, ExtractOptions, OutputFormat, execute_extract, render_links};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{Level, info, warn};
use url::Url;

const ACCEPTED_SCHEMES: [&str; 2] = ["http", "https"];

// Helper functions for extract handler

/// Parse a command-line value as an absolute page URL
pub fn parse_page_url(value: &str) -> Result<Url, String> {
    let invalid = || format!("Invalid URL: {}. Please provide a valid URL.", value);

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !ACCEPTED_SCHEMES.contains(&url.scheme()) || url.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }

    Ok(url)
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    if let Ok(url) = parse_page_url(line) {
        return Some(url.to_string());
    }

    let with_scheme = format!("http://{}", line);
    if let Ok(url) = parse_page_url(&with_scheme) {
        return Some(url.to_string());
    }

    warn!("Skipping invalid URL '{}'", line);
    None
}

/// Load and parse URLs from a file
pub fn load_urls_from_file(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read URLs file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Combine `--url` values with the contents of `--urls-file`
pub fn collect_urls(urls: &[Url], urls_file: Option<&PathBuf>) -> Result<Vec<String>, String> {
    let mut collected: Vec<String> = urls.iter().map(|u| u.as_str().to_string()).collect();

    if let Some(path) = urls_file {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        collected.extend(load_urls_from_file(Path::new(&expanded))?);
    }

    if collected.is_empty() {
        return Err(
            "No URLs provided. Use the '-u' option to specify at least one URL.".to_string(),
        );
    }

    Ok(collected)
}

/// Install the global tracing subscriber.
///
/// Without a log file, events go to stderr, through `bars` when given so
/// they are not overdrawn by progress redraws.
pub fn init_logging(
    verbosity: &str,
    log_file: Option<&PathBuf>,
    bars: Option<&BarProgress>,
) -> Result<(), String> {
    let level = Level::from_str(verbosity)
        .map_err(|_| format!("Invalid verbosity level: {}", verbosity))?;

    let builder = tracing_subscriber::fmt().with_max_level(level);

    let installed = match log_file {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            let file = File::create(&expanded)
                .map_err(|e| format!("Failed to create log file {}: {}", expanded, e))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => match bars.cloned() {
            Some(bars) => builder.with_writer(move || bars.log_writer()).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        },
    };

    installed.map_err(|e| format!("Failed to initialize logging: {}", e))
}

fn fail(msg: &str) -> ! {
    eprintln!("{} {}", "✗".red().bold(), msg);
    std::process::exit(1);
}

pub async fn handle_extract(sub_matches: &ArgMatches) {
    let verbosity = sub_matches
        .get_one::<String>("verbosity")
        .map(String::as_str)
        .unwrap_or("warn");
    let log_file = sub_matches.get_one::<PathBuf>("log-file");
    let quiet = sub_matches.get_flag("quiet");
    let bars = if quiet {
        BarProgress::hidden()
    } else {
        BarProgress::new()
    };

    if let Err(e) = init_logging(verbosity, log_file, Some(&bars)) {
        fail(&e);
    }

    let urls: Vec<Url> = sub_matches
        .get_many::<Url>("url")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let urls_file = sub_matches.get_one::<PathBuf>("urls-file");
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let max_concurrency = sub_matches.get_one::<usize>("concurrency").copied();

    let output = sub_matches
        .get_one::<String>("output")
        .and_then(|value| OutputFormat::from_str(value));
    let Some(output) = output else {
        fail("Invalid output format. Use 'stdout' or 'json' for the '-o' option.");
    };

    let urls = match collect_urls(&urls, urls_file) {
        Ok(urls) => urls,
        Err(e) => fail(&e),
    };

    if !quiet {
        eprintln!(
            "{} Extracting links from {} URL(s) ({} output)",
            "→".blue(),
            urls.len().to_string().cyan(),
            output.as_str()
        );
    }
    info!("Starting linkex {}", env!("CARGO_PKG_VERSION"));

    let options = ExtractOptions {
        urls,
        timeout_secs,
        max_concurrency,
        show_progress_bars: !quiet,
        progress: Some(bars),
    };

    let links = match execute_extract(options).await {
        Ok(links) => links,
        Err(e) => fail(&format!("Extraction failed: {:#}", e)),
    };

    if links.is_empty() {
        info!("No links extracted");
        return;
    }

    match render_links(&links, output) {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => fail(&format!("Failed to render output: {}", e)),
    }

    if !quiet {
        eprintln!(
            "{} {} link(s) across {} origin(s)",
            "✓".green().bold(),
            links.link_count(),
            links.len()
        );
    }
}
