//! Scan a saved page for attachment links and print them as JSON.
//!
//! Usage: `link_fetcher [--settings FILE] [--url PAGE_URL] [--exclude GLOB] [FILE]`
//!
//! Reads the page from FILE, or stdin when no file is given. With `--url`
//! the page must match one of the configured URL patterns; the URL also
//! serves as the base for naming files from relative links.

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use link_fetcher::download::DownloadRequest;
use link_fetcher::patterns::{url_matches_patterns, ExclusionFilter};
use link_fetcher::selection::{exclusion_message, found_message, Checklist};
use link_fetcher::{dom, scan, DiscoveredFile, ScanMode, Settings};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: link_fetcher [--settings FILE] [--url PAGE_URL] [--exclude GLOB] [FILE]";

/// Exit status when `--url` is not a configured page.
const EXIT_NOT_CONFIGURED: i32 = 2;

#[derive(Debug, Default)]
struct Args {
    settings: Option<PathBuf>,
    url: Option<String>,
    exclude: Option<String>,
    input: Option<PathBuf>,
}

/// A discovered file plus the type label shown next to it.
#[derive(Debug, Serialize)]
struct Listed {
    #[serde(flatten)]
    file: DiscoveredFile,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl From<DiscoveredFile> for Listed {
    fn from(file: DiscoveredFile) -> Self {
        Self {
            kind: file.extension(),
            file,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    mode: ScanMode,
    files: Vec<Listed>,
    downloads: Vec<DownloadRequest>,
}

#[derive(Debug)]
enum Outcome {
    NotConfigured,
    Report(Output),
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Option<Args>, Box<dyn Error>> {
    let mut args = Args::default();
    let mut it = argv.into_iter();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--settings" | "-s" => {
                args.settings = Some(PathBuf::from(it.next().ok_or("Missing value for --settings")?));
            }
            "--url" | "-u" => args.url = Some(it.next().ok_or("Missing value for --url")?),
            "--exclude" | "-x" => args.exclude = Some(it.next().ok_or("Missing value for --exclude")?),
            "--help" | "-h" => return Ok(None),
            other if other.starts_with('-') => return Err(format!("Unknown option: {other}").into()),
            path => args.input = Some(PathBuf::from(path)),
        }
    }

    Ok(Some(args))
}

fn read_page(input: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match input {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Everything after the settings are loaded: gate, scan, exclude, list.
fn render(
    mut settings: Settings,
    url: Option<&str>,
    exclude: Option<&str>,
    page: &[u8],
) -> Result<Outcome, Box<dyn Error>> {
    settings.validate()?;

    if let Some(url) = url {
        if !url_matches_patterns(url, &settings.url_patterns) {
            return Ok(Outcome::NotConfigured);
        }
        settings.scan.base_url = Some(url.to_string());
    }

    let doc = dom::parse(&link_fetcher::encoding::transcode_to_utf8(page));
    let report = scan(&doc, &settings.scan);
    tracing::info!(mode = ?report.mode, files = report.files.len(), "{}", found_message(report.files.len()));

    let mut checklist = Checklist::new(report.files.clone());
    if let Some(pattern) = exclude {
        let filter = ExclusionFilter::new(pattern)?;
        if !filter.is_blank() {
            let excluded = checklist.apply_exclusion(&filter);
            tracing::info!("{}", exclusion_message(excluded));
        }
    }
    tracing::info!("{}", checklist.summary());

    Ok(Outcome::Report(Output {
        downloads: checklist.selected().into_iter().map(DownloadRequest::from).collect(),
        mode: report.mode,
        files: report.files.into_iter().map(Listed::from).collect(),
    }))
}

fn run() -> Result<i32, Box<dyn Error>> {
    let Some(args) = parse_args(env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(0);
    };

    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let page = read_page(args.input.as_ref())?;

    match render(settings, args.url.as_deref(), args.exclude.as_deref(), &page)? {
        Outcome::NotConfigured => {
            tracing::warn!("Not a configured page. Add a matching URL pattern to the settings.");
            Ok(EXIT_NOT_CONFIGURED)
        }
        Outcome::Report(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(0)
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,link_fetcher=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            tracing::error!("link_fetcher error: {err}");
            process::exit(1);
        }
    }
}
