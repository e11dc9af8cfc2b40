//! Survey aggregation pipeline for the CyclePerform dashboard.
//!
//! Loads a form-response export, relabels question columns to short display
//! labels, derives the composite impact score, and serves distribution and
//! correlation aggregates plus the static phase "digital twin" data as plain
//! serializable values. Rendering, HTTP, and UI state belong to the caller;
//! the bundled binary is one minimal such caller.

pub mod aggregate;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod sample;
pub mod score;
pub mod twin;

pub use crate::catalog::{QuestionCatalog, DASHBOARD_METRICS, IMPACT_QUESTIONS};
pub use crate::dashboard::{Dashboard, DashboardSnapshot};
pub use crate::error::{SurveyError, SurveyResult};
pub use crate::models::{
    CorrelationMatrix, DistributionResult, ImpactLevel, LevelCount, SurveyRecord, SurveyTable,
};
