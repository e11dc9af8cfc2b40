use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Ordinal survey response. Code 1 reads as high impact, 3 as low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    #[serde(rename = "High Impact")]
    High,
    #[serde(rename = "Moderate Impact")]
    Moderate,
    #[serde(rename = "Low Impact")]
    Low,
}

impl ImpactLevel {
    /// All levels in ascending code order.
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::High, ImpactLevel::Moderate, ImpactLevel::Low];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ImpactLevel::High),
            2 => Some(ImpactLevel::Moderate),
            3 => Some(ImpactLevel::Low),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ImpactLevel::High => 1,
            ImpactLevel::Moderate => 2,
            ImpactLevel::Low => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::High => "High Impact",
            ImpactLevel::Moderate => "Moderate Impact",
            ImpactLevel::Low => "Low Impact",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One respondent's answers, keyed by column name. After labeling, a record
/// holds the same code under both the long question text and the short
/// display label. `None` is the explicit missing marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    /// 1-based row in the source export.
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
    pub answers: BTreeMap<String, Option<ImpactLevel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,
}

impl SurveyRecord {
    /// Answer for one column; absent keys read as missing.
    pub fn answer(&self, column: &str) -> Option<ImpactLevel> {
        self.answers.get(column).copied().flatten()
    }
}

/// Ordered respondent rows sharing one column set. Read-only after the
/// loader/scorer have run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyTable {
    pub columns: Vec<String>,
    pub records: Vec<SurveyRecord>,
}

impl SurveyTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Per-record codes for one column, missing markers preserved.
    pub fn column(&self, name: &str) -> Vec<Option<ImpactLevel>> {
        self.records.iter().map(|record| record.answer(name)).collect()
    }

    /// Mean of the derived impact scores, `None` when no record carries one.
    pub fn mean_impact_score(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .records
            .iter()
            .filter_map(|record| record.impact_score)
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCount {
    pub level: ImpactLevel,
    pub count: usize,
}

/// Answer counts for one labeled question, ordered by ascending code.
/// Every level is present, zero counts included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionResult {
    pub label: String,
    pub levels: Vec<LevelCount>,
}

/// Square symmetric Pearson matrix over a fixed metric order. Cells that
/// cannot be computed are NaN; consumers render those blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub metrics: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}
