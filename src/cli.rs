// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::*;
use crate::config::options::{
    AppOptions, ExportFormat, ExportOptions, FeedOptions, FeedSource, ParseOptions,
};
use crate::data::{FilterState, FilterView, Stats, distinct_category_tags};
use crate::progress::{NullProgress, Progress};
use crate::store::{Record, RecordStore};
use crate::{file, log, runner};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Cards,
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Cards => ExportFormat::Cards,
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

/// Fetch the register sheet and print its entries.
#[derive(Debug, Parser)]
#[command(name = "register-scrape", version)]
pub struct Args {
    /// Feed URL (opensheet JSON endpoint)
    #[arg(long, env = "REGISTER_FEED_URL", default_value = FEED_URL)]
    pub url: String,

    /// Read a captured JSON response instead of fetching
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Row key holding the cell value [default: first string value]
    #[arg(long, value_name = "KEY")]
    pub column: Option<String>,

    /// Name of the first real entry
    #[arg(long, default_value = DEFAULT_ANCHOR)]
    pub anchor: String,

    /// Cells after a name searched for its fields
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,

    /// Request timeout
    #[arg(long, value_name = "SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Case-insensitive search over name, links and level
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only entries whose level contains this tag
    #[arg(short, long, default_value = ALL_LEVELS)]
    pub level: String,

    /// Print the known level tags and exit
    #[arg(long)]
    pub list_levels: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Cards)]
    pub format: Format,

    /// Header row for csv/tsv
    #[arg(long)]
    pub include_headers: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// More logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Errors only, no status lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let source = match &self.input {
            Some(path) => FeedSource::File(path.clone()),
            None => FeedSource::Url(self.url.clone()),
        };
        AppOptions {
            feed: FeedOptions {
                source,
                column: self.column.clone(),
                timeout: Duration::from_secs(self.timeout),
            },
            parse: ParseOptions {
                anchor: self.anchor.clone(),
                lookahead: self.lookahead,
            },
            filter: FilterState::new(&self.search, &self.level),
            export: ExportOptions {
                format: self.format.into(),
                include_headers: self.include_headers,
                out_path: self.out.clone(),
            },
        }
    }
}

/// Status lines on stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, source: &str) {
        eprintln!("Loading {source}");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run(args: Args) -> Result<()> {
    log::init(args.verbose, args.quiet);
    let opts = args.to_options();

    let mut store = RecordStore::new();
    let (mut null, mut stderr) = (NullProgress, StderrProgress);
    let progress: &mut dyn Progress = if args.quiet { &mut null } else { &mut stderr };
    runner::reload(&mut store, &opts.feed, &opts.parse, Some(progress))
        .wrap_err(LOAD_FAILED_MSG)?;

    let all = store.current();

    if args.list_levels {
        for tag in distinct_category_tags(all.records()) {
            println!("{tag}");
        }
        return Ok(());
    }

    let view = FilterView::from_set(all, &opts.filter);

    // Cards read latest-first; exports keep sheet order.
    let records: Vec<&Record> = match opts.export.format {
        ExportFormat::Cards => view.iter_display().collect(),
        _ => view.iter().collect(),
    };

    let contents = file::render_records(&opts.export, &records)?;
    file::write_output(&opts.export, &contents)?;

    if let Some(path) = &opts.export.out_path {
        if !args.quiet { eprintln!("Wrote {}", path.display()); }
    }
    if !args.quiet {
        eprintln!("{}", Stats::new(&view, &opts.filter));
    }
    Ok(())
}
