// src/csv.rs
use std::io::Write;

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::config::options::ExportFormat;
use crate::depth::{DepthChartRecord, RECORD_HEADERS};
use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Write records to any writer. The header row is written even when there
/// are no records, so an empty export is still a valid table.
pub fn write_records<W: Write>(
    w: W,
    records: &[DepthChartRecord],
    format: ExportFormat,
    include_headers: bool,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false)
        .from_writer(w);

    if include_headers {
        wtr.write_record(RECORD_HEADERS)?;
    }
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush().map_err(::csv::Error::from)?;
    Ok(())
}

/// Whole export as a string (copy-paste, tests).
pub fn to_export_string(
    records: &[DepthChartRecord],
    format: ExportFormat,
    include_headers: bool,
) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records, format, include_headers)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Parsing ---------------- */

/// Load a previous export (with header row) back into records.
pub fn read_records(text: &str, format: ExportFormat) -> Result<Vec<DepthChartRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::{build_record, UnitType};

    fn sample() -> Vec<DepthChartRecord> {
        vec![
            build_record("Army", UnitType::Offense, "WR", 1, "01", "brady-anderson"),
            build_record("Texas A&M, College Station", UnitType::SpecialTeams, "PK", 1, "39", "randy-bond"),
        ]
    }

    #[test]
    fn csv_with_header() {
        let s = to_export_string(&sample(), ExportFormat::Csv, true).unwrap();
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some("team,unit_type,position,depth,jersey,player"));
        assert_eq!(lines.next(), Some("Army,Offense,WR,1,01,Brady Anderson"));
        assert_eq!(lines.next(), Some("\"Texas A&M, College Station\",Special Teams,PK,1,39,Randy Bond"));
    }

    #[test]
    fn tsv_without_header() {
        let s = to_export_string(&sample()[..1], ExportFormat::Tsv, false).unwrap();
        assert_eq!(s, "Army\tOffense\tWR\t1\t01\tBrady Anderson\n");
    }

    #[test]
    fn empty_export_keeps_header() {
        let s = to_export_string(&[], ExportFormat::Csv, true).unwrap();
        assert_eq!(s, "team,unit_type,position,depth,jersey,player\n");
    }

    #[test]
    fn reload_previous_export() {
        let s = to_export_string(&sample(), ExportFormat::Tsv, true).unwrap();
        let back = read_records(&s, ExportFormat::Tsv).unwrap();
        assert_eq!(back, sample());
    }
}
