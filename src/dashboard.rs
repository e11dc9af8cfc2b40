use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::aggregate;
use crate::catalog::{QuestionCatalog, DASHBOARD_METRICS};
use crate::error::SurveyResult;
use crate::loader;
use crate::models::{CorrelationMatrix, DistributionResult, SurveyRecord, SurveyTable};
use crate::score;
use crate::twin::{PhaseProfile, PHASE_PROFILES};

/// Read-only query surface over one loaded survey. Every method is a pure
/// read, so shared references can serve any number of callers at once.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: SurveyTable,
    catalog: QuestionCatalog,
}

impl Dashboard {
    /// Loads, labels, and scores a survey export in one pass. Load failures
    /// are fatal here; there is nothing to serve without the table.
    pub fn open(path: &Path) -> SurveyResult<Self> {
        let catalog = QuestionCatalog::standard();
        let table = loader::load(path, &catalog)?;
        let table = score::apply_labels(table, &catalog);
        let table = score::compute_impact_scores(table);
        Ok(Self { table, catalog })
    }

    /// Wraps an already-prepared table and catalog.
    pub fn from_parts(table: SurveyTable, catalog: QuestionCatalog) -> Self {
        Self { table, catalog }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// The labeled, scored table.
    pub fn scored_table(&self) -> &SurveyTable {
        &self.table
    }

    pub fn distribution(&self, label: &str) -> SurveyResult<DistributionResult> {
        aggregate::distribution(&self.table, &self.catalog, label)
    }

    pub fn correlation_matrix(&self, metrics: &[&str]) -> CorrelationMatrix {
        aggregate::correlation_matrix(&self.table, metrics)
    }

    /// Everything a front-end needs to draw the dashboard, as one
    /// serializable bundle. NaN correlation cells serialize as null.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let distributions = DASHBOARD_METRICS
            .iter()
            .filter_map(|metric| self.distribution(metric).ok())
            .collect();

        DashboardSnapshot {
            generated_on: Utc::now().date_naive(),
            respondents: self.table.len(),
            mean_impact_score: self.table.mean_impact_score(),
            distributions,
            correlations: self.correlation_matrix(&DASHBOARD_METRICS),
            phase_profiles: PHASE_PROFILES.to_vec(),
            records: self.table.records.clone(),
        }
    }
}

/// Ready-to-render series for an external presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_on: NaiveDate,
    pub respondents: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_impact_score: Option<f64>,
    pub distributions: Vec<DistributionResult>,
    pub correlations: CorrelationMatrix,
    pub phase_profiles: Vec<PhaseProfile>,
    pub records: Vec<SurveyRecord>,
}
