use log::debug;

use crate::catalog::{QuestionCatalog, IMPACT_QUESTIONS};
use crate::models::SurveyTable;

/// Adds a short-label column for every catalog question present in the
/// table, holding the same codes as the source column. Source columns stay;
/// catalog entries with no matching column are silently skipped, so the
/// catalog may be a superset of the schema. Applying this twice is the same
/// as applying it once.
pub fn apply_labels(mut table: SurveyTable, catalog: &QuestionCatalog) -> SurveyTable {
    for (source, label) in catalog.entries() {
        if !table.has_column(source) || table.has_column(label) {
            continue;
        }
        table.columns.push(label.to_string());
        for record in &mut table.records {
            let code = record.answer(source);
            record.answers.insert(label.to_string(), code);
        }
    }
    table
}

/// Derives the composite impact score: per record, the mean code of
/// whichever of the five designated questions are answered. Missing answers
/// drop out of that record's mean; a record with none of the five answered
/// gets no score. When none of the five columns exist at all the feature is
/// left out for the whole table rather than scoring every record as missing.
pub fn compute_impact_scores(mut table: SurveyTable) -> SurveyTable {
    let present: Vec<&str> = IMPACT_QUESTIONS
        .iter()
        .copied()
        .filter(|question| table.has_column(question))
        .collect();

    if present.is_empty() {
        debug!("no impact-score columns in table; score omitted");
        return table;
    }

    for record in &mut table.records {
        let codes: Vec<f64> = present
            .iter()
            .filter_map(|question| record.answer(question))
            .map(|level| f64::from(level.code()))
            .collect();

        record.impact_score = if codes.is_empty() {
            None
        } else {
            Some(codes.iter().sum::<f64>() / codes.len() as f64)
        };
    }

    table
}
