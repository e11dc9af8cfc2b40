use std::fs;

use cycleperform::catalog::DASHBOARD_METRICS;
use cycleperform::dashboard::Dashboard;
use cycleperform::{report, sample, twin, SurveyError};

#[test]
fn sample_export_flows_through_the_whole_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("responses.csv");
    sample::write_sample(&csv, 120, Some(9)).expect("sample written");

    let dashboard = Dashboard::open(&csv).expect("dashboard opens");
    let table = dashboard.scored_table();
    assert_eq!(table.len(), 120);
    // 15 source columns plus 15 label columns.
    assert_eq!(table.columns.len(), 30);
    assert!(table.mean_impact_score().is_some());

    let dist = dashboard
        .distribution("Energy Fluctuations")
        .expect("known label");
    assert_eq!(dist.levels.len(), 3);
    let total: usize = dist.levels.iter().map(|entry| entry.count).sum();
    assert!(total <= 120);

    let matrix = dashboard.correlation_matrix(&DASHBOARD_METRICS);
    for i in 0..matrix.metrics.len() {
        assert_eq!(matrix.get(i, i), 1.0);
        for j in 0..matrix.metrics.len() {
            let forward = matrix.get(i, j);
            let backward = matrix.get(j, i);
            assert!(
                (forward.is_nan() && backward.is_nan()) || forward == backward,
                "cell ({i},{j}) not symmetric"
            );
        }
    }

    let snapshot = dashboard.snapshot();
    let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
    assert_eq!(json["respondents"], 120);
    assert_eq!(json["distributions"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["phase_profiles"].as_array().map(Vec::len), Some(4));

    let plan = twin::training_plan(Some(9));
    let rendered = report::build_report(&dashboard, &plan);
    assert!(rendered.contains("# CyclePerform Survey Report"));
    assert!(rendered.contains("## Metric Correlations"));

    let out = dir.path().join("report.md");
    fs::write(&out, rendered).expect("report written");
    assert!(out.exists());
}

#[test]
fn unusable_sources_fail_before_any_table_exists() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("nowhere.csv");
    match Dashboard::open(&missing) {
        Err(SurveyError::SourceUnavailable { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }

    let unrelated = dir.path().join("unrelated.csv");
    fs::write(&unrelated, "Name,Team\nSam,Track\n").expect("fixture written");
    match Dashboard::open(&unrelated) {
        Err(SurveyError::SchemaMismatch { column_count }) => assert_eq!(column_count, 2),
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}
