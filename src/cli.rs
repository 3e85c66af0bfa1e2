// src/cli.rs
use std::{error::Error, io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{
    config::{
        self,
        options::{AppOptions, ExportFormat, FetchMode},
    },
    details::{FIELD_LABELS, fetch_details},
    file::{write_details_export, write_export},
    progress::Progress,
    runner::{self, RunOutcome},
    sample::{SAMPLE_LABEL, SAMPLE_PAGE},
};

#[derive(Debug, Parser)]
#[command(name = "maps_scrape")]
#[command(about = "Pull Google Maps links out of web pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a page and list the Google Maps URLs on it.
    Extract {
        /// Page to scan (http:// or https://).
        url: String,
    },

    /// Run the extractor over the built-in sample directory page.
    Sample,

    /// Read business name, address, phone, website and email from a page.
    Details {
        url: String,

        /// Don't visit the business website to look for an email.
        #[arg(long)]
        no_email: bool,
    },
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// How to get the page: headless browser, plain HTTP, or browser with HTTP fallback.
    #[arg(long, global = true, value_enum)]
    pub mode: Option<ModeArg>,

    /// Also write results to this file (or directory, with a trailing slash).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Include the header row in CSV output.
    #[arg(long, global = true, value_name = "BOOL")]
    pub headers: Option<bool>,

    /// Print page diagnostics even when URLs were found.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Settings file (default: .store/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    Auto,
    Browser,
    Http,
}

impl From<ModeArg> for FetchMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Auto => FetchMode::Auto,
            ModeArg::Browser => FetchMode::Browser,
            ModeArg::Http => FetchMode::Http,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Txt,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Txt => ExportFormat::Txt,
        }
    }
}

/// Config file first, then command-line overrides.
pub fn resolve_options(args: &CommonArgs) -> Result<AppOptions, Box<dyn Error>> {
    let mut opts = match &args.config {
        Some(path) => config::file::load_from(path)?,
        None => config::file::load_or_default(),
    };
    if let Some(m) = args.mode {
        opts.fetch.mode = m.into();
    }
    if let Some(f) = args.format {
        opts.export.format = f.into();
    }
    if let Some(h) = args.headers {
        opts.export.include_headers = h;
    }
    if let Some(out) = &args.out {
        opts.export.set_path(&out.to_string_lossy());
    }
    opts.debug |= args.debug;
    Ok(opts)
}

/// Progress lines on stderr, so stdout stays clean for the URL list.
pub struct CliProgress;

impl Progress for CliProgress {
    fn step(&mut self, percent: u8, msg: &str) {
        eprintln!("[{percent:>3}%] {msg}");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("warning: {msg}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    crate::log::init();
    let mut opts = resolve_options(&cli.common)?;
    let write_file = cli.common.out.is_some();
    let mut progress = CliProgress;

    match cli.command {
        Command::Extract { url } => {
            let outcome = runner::run(&url, &opts, Some(&mut progress))?;
            report(&outcome, &opts, write_file)
        }
        Command::Sample => {
            let outcome = runner::run_on_text(SAMPLE_PAGE, SAMPLE_LABEL, &opts, Some(&mut progress));
            report(&outcome, &opts, write_file)
        }
        Command::Details { url, no_email } => {
            opts.lookup_email &= !no_email;
            let details = fetch_details(&url, &opts, Some(&mut progress))?;
            let mut stdout = std::io::stdout().lock();
            for (label, value) in FIELD_LABELS.iter().zip(details.values()) {
                writeln!(stdout, "{label}: {value}")?;
            }
            if write_file {
                let path = write_details_export(&opts.export, std::slice::from_ref(&details))?;
                eprintln!("Wrote {}", path.display());
            }
            Ok(())
        }
    }
}

fn report(outcome: &RunOutcome, opts: &AppOptions, write_file: bool) -> Result<(), Box<dyn Error>> {
    let mut stdout = std::io::stdout().lock();
    for url in &outcome.urls {
        writeln!(stdout, "{url}")?;
    }

    if let Some(diag) = &outcome.diagnostics {
        eprintln!("{diag}");
    }
    if outcome.is_empty() {
        eprintln!(
            "No Google Maps URLs found. The page may not list businesses, \
             or needs the browser mode to render its results."
        );
        return Ok(());
    }

    eprintln!("Found {} Google Maps URLs ({} chars via {})", outcome.urls.len(), outcome.page_len, outcome.source);
    if write_file {
        let path = write_export(&opts.export, &outcome.urls)?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
