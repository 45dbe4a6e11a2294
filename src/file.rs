// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
    collections::HashMap,
};

use crate::csv::to_export_string;
use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_file_stem;
use crate::data::DataSet;
use crate::error::{Result, TallyError};

/// Write `contents` to the single export file, creating its directory.
/// Returns the final path written to.
pub fn write_export_single(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Render a table with the export's delimiter and header policy.
/// `None` for formats that are not delimited tables.
pub fn render_table(export: &ExportOptions, ds: &DataSet) -> Option<String> {
    let sep = export.format.delimiter()?;
    Some(to_export_string(&ds.headers, &ds.rows, export.include_headers, sep))
}

/// Write one delimited file per game into `dir`.
/// `game_col` is the column index of the game id in `ds.rows`.
pub fn write_export_per_game(
    export: &ExportOptions,
    dir: &Path,
    ds: &DataSet,
    game_col: usize,
) -> Result<Vec<PathBuf>> {
    // Group rows by game, first appearance first
    let mut groups: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    for r in &ds.rows {
        let Some(game) = r.get(game_col) else { continue };
        match groups.iter_mut().find(|(g, _)| g == game) {
            Some((_, rows)) => rows.push(r.clone()),
            None => groups.push((game.clone(), vec![r.clone()])),
        }
    }

    let docs: Vec<(String, String)> = groups
        .into_iter()
        .filter_map(|(game, rows)| {
            let part = DataSet { headers: ds.headers.clone(), rows };
            render_table(export, &part).map(|text| (game, text))
        })
        .collect();

    write_documents(export, dir, &docs)
}

/// Write `(game id, contents)` pairs as `<dir>/<game id>.<ext>`.
pub fn write_documents(
    export: &ExportOptions,
    dir: &Path,
    docs: &[(String, String)],
) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(docs.len());
    let ext = export.format.ext();

    for (game, contents) in docs {
        let stem = sanitize_file_stem(game, "game");
        let path = resolve_game_filename(dir, &stem, &mut seen, ext);
        fs::write(&path, contents)?;
        logd!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(TallyError::Io(std::io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_game_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "json"
) -> PathBuf {
    let count = seen_names.entry(s!(stem)).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
