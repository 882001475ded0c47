// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_team_filename;
use crate::csv::write_records;
use crate::depth::DepthChartRecord;
use crate::error::{Result, ScrapeError};

/// Write records according to ExportOptions. Returns every path written.
pub fn export_records(export: &ExportOptions, records: &[DepthChartRecord]) -> Result<Vec<PathBuf>> {
    match export.export_type {
        ExportType::SingleFile => write_export_single(export, records).map(|p| vec![p]),
        ExportType::PerTeam => write_export_per_team(export, records),
    }
}

pub fn write_export_single(export: &ExportOptions, records: &[DepthChartRecord]) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    write_file(&path, export, records)?;
    Ok(path)
}

/// One file per team in the directory implied by `export.out_path()`.
/// Teams keep their first-seen order; colliding file names get " (2)", " (3)" ….
pub fn write_export_per_team(export: &ExportOptions, records: &[DepthChartRecord]) -> Result<Vec<PathBuf>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let mut order: Vec<&str> = Vec::new();
    let mut by_team: HashMap<&str, Vec<DepthChartRecord>> = HashMap::new();
    for r in records {
        let rows = by_team.entry(r.team.as_str()).or_insert_with(|| {
            order.push(r.team.as_str());
            Vec::new()
        });
        rows.push(r.clone());
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(order.len());
    let ext = export.format.ext();

    for team in order {
        let stem = sanitize_team_filename(team);
        let path = resolve_team_filename(&outdir, &stem, &mut seen, ext);
        write_file(&path, export, &by_team[team])?;
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, export: &ExportOptions, records: &[DepthChartRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| ScrapeError::io(path, e))?; // truncate/overwrite
    write_records(BufWriter::new(file), records, export.format, export.include_headers)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_team_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv"
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

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
