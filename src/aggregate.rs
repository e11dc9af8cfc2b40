use crate::catalog::QuestionCatalog;
use crate::error::{SurveyError, SurveyResult};
use crate::models::{CorrelationMatrix, DistributionResult, ImpactLevel, LevelCount, SurveyTable};

/// Counts answers for one labeled question. The label is resolved to its
/// source column through the catalog; a label the catalog does not know is
/// `UnknownLabel`. All three levels are emitted even at zero so chart axes
/// stay put.
pub fn distribution(
    table: &SurveyTable,
    catalog: &QuestionCatalog,
    label: &str,
) -> SurveyResult<DistributionResult> {
    let source = catalog
        .source_for(label)
        .ok_or_else(|| SurveyError::UnknownLabel {
            label: label.to_string(),
        })?;

    let mut counts = [0usize; 3];
    for level in table.column(source).into_iter().flatten() {
        counts[usize::from(level.code() - 1)] += 1;
    }

    let levels = ImpactLevel::ALL
        .iter()
        .map(|&level| LevelCount {
            level,
            count: counts[usize::from(level.code() - 1)],
        })
        .collect();

    Ok(DistributionResult {
        label: label.to_string(),
        levels,
    })
}

/// Pearson correlation between two columns over the respondents who answered
/// both (pairwise deletion). Fewer than two paired observations is
/// `InsufficientData`; zero variance on either side yields NaN.
pub fn correlation_between(table: &SurveyTable, first: &str, second: &str) -> SurveyResult<f64> {
    let pairs: Vec<(f64, f64)> = table
        .column(first)
        .into_iter()
        .zip(table.column(second))
        .filter_map(|(x, y)| Some((f64::from(x?.code()), f64::from(y?.code()))))
        .collect();

    if pairs.len() < 2 {
        return Err(SurveyError::InsufficientData {
            first: first.to_string(),
            second: second.to_string(),
            observed: pairs.len(),
        });
    }

    Ok(pearson(&pairs))
}

/// Pairwise Pearson matrix over the requested column labels. Cells that
/// cannot be computed come back NaN rather than failing the matrix; the
/// diagonal is fixed at 1.0.
pub fn correlation_matrix(table: &SurveyTable, metrics: &[&str]) -> CorrelationMatrix {
    let size = metrics.len();
    let mut values = vec![vec![f64::NAN; size]; size];

    for i in 0..size {
        values[i][i] = 1.0;
        for j in (i + 1)..size {
            let cell = correlation_between(table, metrics[i], metrics[j]).unwrap_or(f64::NAN);
            values[i][j] = cell;
            values[j][i] = cell;
        }
    }

    CorrelationMatrix {
        metrics: metrics.iter().map(|metric| metric.to_string()).collect(),
        values,
    }
}

fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (covariance, variance_x, variance_y) =
        pairs
            .iter()
            .fold((0.0, 0.0, 0.0), |(cov, var_x, var_y), (x, y)| {
                let dx = x - mean_x;
                let dy = y - mean_y;
                (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
            });

    if variance_x == 0.0 || variance_y == 0.0 {
        return f64::NAN;
    }

    covariance / (variance_x.sqrt() * variance_y.sqrt())
}
