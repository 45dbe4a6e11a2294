// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::consts::WORKERS;
use crate::config::options::{ExportFormat, ExportType, RunOptions, TableKind, Window};
use crate::progress::Progress;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Per-turn ledgers, totals and winners from BGA Puerto Rico logs", long_about = None)]
struct Args {
    /// Log files, or directories of `*.log` files (id = file stem)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Emit per-turn ledger rows instead of per-player totals
    #[arg(long, action = ArgAction::SetTrue)]
    ledger: bool,

    /// First turn of the window (0-based)
    #[arg(long, default_value_t = 0)]
    from: usize,

    /// End of the window, exclusive (default: end of game)
    #[arg(long)]
    until: Option<usize>,

    /// Keep only games with exactly this many players
    #[arg(long)]
    players: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Output file (or directory with --per-game). Default: stdout
    #[arg(short, long)]
    out: Option<String>,

    /// One file per game
    #[arg(long, action = ArgAction::SetTrue)]
    per_game: bool,

    /// Omit the header line in CSV/TSV output
    #[arg(long, action = ArgAction::SetTrue)]
    no_headers: bool,

    /// Parser threads
    #[arg(long, default_value_t = WORKERS)]
    workers: usize,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_options(self) -> RunOptions {
        let mut opts = RunOptions {
            inputs: self.inputs,
            table: if self.ledger { TableKind::Ledger } else { TableKind::Totals },
            window: Window { start: self.from, end: self.until },
            players: self.players,
            workers: self.workers.max(1),
            ..Default::default()
        };
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if self.per_game {
            opts.export.export_type = ExportType::PerGame;
        }
        if let Some(out) = self.out {
            opts.export.set_path(&out);
        }
        opts
    }
}

/// Status lines on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, _id: &str) {
        self.done += 1;
    }

    fn item_failed(&mut self, id: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] game {id} skipped: {reason}", self.done, self.total);
    }

    fn finish(&mut self) {
        eprintln!("{}/{} games processed", self.done, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.into_options();
    let mut progress = StderrProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    if let Some(text) = summary.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
    }
    for path in &summary.files_written {
        eprintln!("Wrote {}", path.display());
    }
    logf!("{} games exported, {} failed", summary.games, summary.failures.len());
    Ok(())
}
