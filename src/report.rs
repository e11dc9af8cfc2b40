use std::fmt::Write;

use chrono::Utc;

use crate::catalog::DASHBOARD_METRICS;
use crate::dashboard::Dashboard;
use crate::twin::{self, PlannedDay, PHASE_PROFILES};

/// Renders the survey aggregates and the phase model as one markdown
/// document. NaN correlation cells render as blank table cells.
pub fn build_report(dashboard: &Dashboard, plan: &[PlannedDay]) -> String {
    let table = dashboard.scored_table();
    let mut output = String::new();

    let _ = writeln!(output, "# CyclePerform Survey Report");
    let _ = writeln!(
        output,
        "Generated {} from {} responses.",
        Utc::now().date_naive(),
        table.len()
    );

    let submitted: Vec<_> = table
        .records
        .iter()
        .filter_map(|record| record.submitted_at)
        .collect();
    if let (Some(first), Some(last)) = (submitted.iter().min(), submitted.iter().max()) {
        let _ = writeln!(
            output,
            "Responses collected between {} and {}.",
            first.format("%Y-%m-%d %H:%M"),
            last.format("%Y-%m-%d %H:%M")
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Impact Overview");
    match table.mean_impact_score() {
        Some(mean) => {
            let scored = table
                .records
                .iter()
                .filter(|record| record.impact_score.is_some())
                .count();
            let _ = writeln!(
                output,
                "Mean impact score {mean:.2} across {scored} scored respondents (1 = high impact, 3 = low)."
            );
        }
        None => {
            let _ = writeln!(output, "No impact scores available for this table.");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Response Distributions");
    for metric in DASHBOARD_METRICS {
        let _ = writeln!(output);
        let _ = writeln!(output, "### {metric}");
        match dashboard.distribution(metric) {
            Ok(result) => {
                for entry in &result.levels {
                    let _ = writeln!(output, "- {}: {}", entry.level, entry.count);
                }
            }
            Err(_) => {
                let _ = writeln!(output, "Not part of the question catalog.");
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Metric Correlations");
    let matrix = dashboard.correlation_matrix(&DASHBOARD_METRICS);
    let _ = writeln!(output, "| Metric | {} |", matrix.metrics.join(" | "));
    let _ = writeln!(output, "|---|{}", "---|".repeat(matrix.metrics.len()));
    for (index, metric) in matrix.metrics.iter().enumerate() {
        let cells: Vec<String> = matrix.values[index]
            .iter()
            .map(|value| {
                if value.is_nan() {
                    String::new()
                } else {
                    format!("{value:.2}")
                }
            })
            .collect();
        let _ = writeln!(output, "| {} | {} |", metric, cells.join(" | "));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Phase Guide");
    for profile in PHASE_PROFILES {
        let _ = writeln!(output);
        let _ = writeln!(output, "### {}", profile.phase);
        let _ = writeln!(
            output,
            "Energy {}, strength {}, endurance {}, recovery {}; recommended intensity {}%.",
            profile.energy,
            profile.strength,
            profile.endurance,
            profile.recovery,
            profile.recommended_intensity
        );
        let sessions: Vec<String> = twin::workouts(profile.phase)
            .iter()
            .map(|workout| {
                format!(
                    "{} ({}% / {} min)",
                    workout.name, workout.intensity, workout.duration_min
                )
            })
            .collect();
        let _ = writeln!(output, "Suggested sessions: {}.", sessions.join(", "));
        for tip in twin::advice(profile.phase) {
            let _ = writeln!(output, "- {tip}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## 28-Day Training Plan");
    if plan.is_empty() {
        let _ = writeln!(output, "No plan generated.");
    } else {
        for day in plan {
            let _ = writeln!(
                output,
                "- Day {} ({}): {} at {}% intensity",
                day.day, day.phase, day.workout, day.intensity
            );
        }
    }

    output
}
