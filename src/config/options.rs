// src/config/options.rs
use std::ffi::OsString;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Cell separator; `None` for formats that are not delimited tables.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerGame,
}

/// Which table a run produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// One row per game and player, summed over the window.
    Totals,
    /// One row per game, turn and player.
    Ledger,
}

/// Turn range `[start, end)` used for partial-game aggregation.
/// `end == None` means "through the last turn".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: Option<usize>,
}

impl Window {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn until(end: usize) -> Self {
        Self { start: 0, end: Some(end) }
    }

    /// Clamp to a game of `turns` turns. Never panics: an inverted or
    /// out-of-range window collapses to an empty range.
    pub fn range(&self, turns: usize) -> Range<usize> {
        let end = self.end.unwrap_or(turns).min(turns);
        let start = self.start.min(end);
        start..end
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,     // without extension
    ext: Option<OsString>,   // user-supplied; format decides otherwise
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub include_headers: bool,
    out_path: Option<OutputPath>, // None: stdout for single-file runs
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            include_headers: true,
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// Resolved destination.
    /// - SingleFile: `Some(dir/stem.ext)`, or `None` for stdout.
    /// - PerGame: the directory; defaults to `out/` when nothing was set.
    pub fn out_path(&self) -> Option<PathBuf> {
        match self.export_type {
            ExportType::SingleFile => {
                let out = self.out_path.as_ref()?;
                let mut name = out.file_stem.clone();
                name.push(".");
                match &out.ext {
                    Some(ext) => name.push(ext),
                    None => name.push(self.format.ext()),
                }
                Some(out.dir.join(name))
            }
            ExportType::PerGame => Some(
                self.out_path
                    .as_ref()
                    .map(|o| o.dir.clone())
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            ),
        }
    }

    /// Parse user text into dir + stem (+ extension). Interpreted per export type.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }
        let mut out = self.out_path.clone().unwrap_or_default();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                out.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
                if let Some(stem) = p.file_stem() {
                    out.file_stem = stem.to_os_string();
                }
                out.ext = p.extension().map(|e| e.to_os_string());
            }
            ExportType::PerGame => {
                out.dir = PathBuf::from(s);
            }
        }
        self.out_path = Some(out);
    }
}

/// Everything one CLI invocation needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Log files and/or directories of `*.log` files.
    pub inputs: Vec<PathBuf>,
    pub table: TableKind,
    pub window: Window,
    /// Keep only games with exactly this many distinct players.
    pub players: Option<usize>,
    pub workers: usize,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            table: TableKind::Totals,
            window: Window::full(),
            players: None,
            workers: WORKERS,
            export: ExportOptions::default(),
        }
    }
}
