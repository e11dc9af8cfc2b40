use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::catalog::QuestionCatalog;
use crate::error::{SurveyError, SurveyResult};
use crate::models::{ImpactLevel, SurveyRecord, SurveyTable};

/// Metadata column in form exports. Parsed as the submission time, never as
/// an answer.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

const TIMESTAMP_FORMATS: [&str; 2] = ["%m/%d/%Y %H:%M:%S", "%Y/%m/%d %H:%M:%S"];

/// Reads a form-response CSV into a normalized table: catalog question
/// columns only, in source order, one record per respondent row.
///
/// Cells that are blank or not an ordinal code 1..=3 become missing markers.
/// Rows shorter than the header are padded with missing markers.
pub fn load(path: &Path, catalog: &QuestionCatalog) -> SurveyResult<SurveyTable> {
    let file = File::open(path).map_err(|err| SurveyError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|err| SurveyError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?
        .clone();

    let mut question_indices: Vec<(usize, String)> = Vec::new();
    let mut timestamp_index = None;
    for (index, header) in headers.iter().enumerate() {
        if header == TIMESTAMP_COLUMN {
            timestamp_index = Some(index);
        } else if catalog.label_for(header).is_some() {
            question_indices.push((index, header.to_string()));
        } else {
            debug!("dropping column not in the question catalog: {header:?}");
        }
    }

    if question_indices.is_empty() {
        return Err(SurveyError::SchemaMismatch {
            column_count: headers.len(),
        });
    }

    let columns: Vec<String> = question_indices
        .iter()
        .map(|(_, name)| name.clone())
        .collect();

    let mut records = Vec::new();
    let mut unreadable_cells = 0usize;

    for (offset, result) in reader.records().enumerate() {
        let csv_record = result.map_err(|err| SurveyError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let submitted_at = timestamp_index
            .and_then(|index| csv_record.get(index))
            .and_then(parse_timestamp);

        let mut answers = BTreeMap::new();
        for (index, name) in &question_indices {
            let cell = csv_record.get(*index).unwrap_or("").trim();
            let code = parse_code(cell);
            if code.is_none() && !cell.is_empty() {
                unreadable_cells += 1;
            }
            answers.insert(name.clone(), code);
        }

        records.push(SurveyRecord {
            row: offset + 1,
            submitted_at,
            answers,
            impact_score: None,
        });
    }

    if unreadable_cells > 0 {
        warn!(
            "{unreadable_cells} cells in {} were not ordinal codes and count as missing",
            path.display()
        );
    }

    Ok(SurveyTable { columns, records })
}

fn parse_code(cell: &str) -> Option<ImpactLevel> {
    cell.parse::<u8>().ok().and_then(ImpactLevel::from_code)
}

fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cell, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(path: &Path, header: &[&str], rows: &[&[&str]]) {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .unwrap();
        writer.write_record(header).unwrap();
        for row in rows {
            writer.write_record(*row).unwrap();
        }
        writer.flush().unwrap();
    }

    fn source(label: &str) -> String {
        QuestionCatalog::standard().source_for(label).unwrap().to_string()
    }

    #[test]
    fn loads_codes_and_drops_unknown_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.csv");
        let energy = source("Energy Fluctuations");
        let motivation = source("Motivation Impact");
        write_fixture(
            &path,
            &[TIMESTAMP_COLUMN, &energy, "Age", &motivation],
            &[
                &["03/01/2024 09:30:00", "1", "21", "2"],
                &["03/01/2024 10:05:00", "3", "19", ""],
            ],
        );

        let table = load(&path, &QuestionCatalog::standard()).unwrap();
        assert_eq!(table.columns, vec![energy.clone(), motivation.clone()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].row, 1);
        assert_eq!(table.records[0].answer(&energy), Some(ImpactLevel::High));
        assert_eq!(table.records[1].answer(&energy), Some(ImpactLevel::Low));
        assert_eq!(table.records[1].answer(&motivation), None);
        assert!(table.records[0].submitted_at.is_some());
    }

    #[test]
    fn short_rows_and_bad_cells_read_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.csv");
        let energy = source("Energy Fluctuations");
        let fatigue = source("Fatigue/Soreness");
        write_fixture(
            &path,
            &[&energy, &fatigue],
            &[&["yes", "2"], &["9", "1"], &["2"]],
        );

        let table = load(&path, &QuestionCatalog::standard()).unwrap();
        assert_eq!(table.records[0].answer(&energy), None);
        assert_eq!(table.records[0].answer(&fatigue), Some(ImpactLevel::Moderate));
        assert_eq!(table.records[1].answer(&energy), None);
        assert_eq!(table.records[2].answer(&energy), Some(ImpactLevel::Moderate));
        assert_eq!(table.records[2].answer(&fatigue), None);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-written.csv");

        let err = load(&path, &QuestionCatalog::standard()).unwrap_err();
        assert!(matches!(err, SurveyError::SourceUnavailable { .. }));
    }

    #[test]
    fn unrelated_headers_are_a_schema_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.csv");
        write_fixture(&path, &["Name", "Age"], &[&["Sam", "22"]]);

        let err = load(&path, &QuestionCatalog::standard()).unwrap_err();
        assert_eq!(err, SurveyError::SchemaMismatch { column_count: 2 });
    }

    #[test]
    fn unparseable_timestamps_are_missing_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("responses.csv");
        let energy = source("Energy Fluctuations");
        write_fixture(
            &path,
            &[TIMESTAMP_COLUMN, &energy],
            &[&["last tuesday", "1"], &["2024/03/05 08:00:00", "2"]],
        );

        let table = load(&path, &QuestionCatalog::standard()).unwrap();
        assert!(table.records[0].submitted_at.is_none());
        assert!(table.records[1].submitted_at.is_some());
    }
}
