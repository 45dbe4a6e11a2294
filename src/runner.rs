// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{ExportFormat, ExportType, RunOptions},
    data::{self, Labeled, GAME_COL},
    error::Result,
    file::{render_table, write_documents, write_export_per_game, write_export_single},
    progress::Progress,
    series::Series,
    store::FileStore,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub games: usize,
    /// `(game id, reason)` for every game that was dropped.
    pub failures: Vec<(String, String)>,
    pub files_written: Vec<PathBuf>,
    /// Rendered output when no destination was set; the caller prints it.
    pub stdout: Option<String>,
}

/// Load every input log, tabulate, and export per `opts`.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let store = FileStore::from_paths(&opts.inputs)?;
    let ids = store.ids();

    if ids.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No game logs found.");
        }
        return Ok(RunSummary::default());
    }

    let load = Series::load(&store, &ids, opts.workers, progress);
    let series = match opts.players {
        Some(n) => {
            let kept = load.series.player_filter(n);
            logf!("{} of {} games have {n} players", kept.len(), load.series.len());
            kept
        }
        None => load.series,
    };

    let games = data::labeled(&series);
    let mut summary = RunSummary { games: games.len(), failures: load.failures, ..Default::default() };
    let export = &opts.export;

    match (export.export_type, export.out_path()) {
        (ExportType::SingleFile, None) => {
            summary.stdout = Some(render(opts, &games)?);
        }
        (ExportType::SingleFile, Some(path)) => {
            let contents = render(opts, &games)?;
            summary.files_written.push(write_export_single(&path, &contents)?);
        }
        (ExportType::PerGame, dir) => {
            let dir = dir.unwrap_or_default();
            summary.files_written = match export.format {
                ExportFormat::Json => {
                    let docs = games
                        .iter()
                        .map(|g| Ok((g.0.clone(), data::to_json(std::slice::from_ref(g), opts.table, opts.window)?)))
                        .collect::<Result<Vec<_>>>()?;
                    write_documents(export, &dir, &docs)?
                }
                ExportFormat::Csv | ExportFormat::Tsv => {
                    let ds = data::table(&games, opts.table, opts.window);
                    write_export_per_game(export, &dir, &ds, GAME_COL)?
                }
            };
        }
    }

    Ok(summary)
}

/// Whole-run output as one document.
fn render(opts: &RunOptions, games: &[Labeled<'_>]) -> Result<String> {
    match opts.export.format {
        ExportFormat::Json => Ok(data::to_json(games, opts.table, opts.window)?),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let ds = data::table(games, opts.table, opts.window);
            Ok(render_table(&opts.export, &ds).unwrap_or_default())
        }
    }
}
