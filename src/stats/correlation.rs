use crate::error::AnalysisError;
use crate::load::Dataset;
use crate::stats::{round4, COUNTRY, MEDIAN_SALARY, PROFIT_2020, PROFIT_2021};

/// Pearson correlation between median salary and 2021 profit, over the
/// organizations of `country` whose profit grew from 2020 to 2021.
///
/// An empty sample reports 0, and so does a zero-variance axis (all
/// salaries equal, or all profits equal).
pub fn salary_profit_correlation(
    data: &Dataset,
    country: &str,
) -> Result<f64, AnalysisError> {
    let mut salaries = Vec::new();
    let mut profits = Vec::new();

    for record in data.records() {
        if record.require(COUNTRY)? != country {
            continue;
        }
        let profit_2021 = record.int_field(PROFIT_2021)?;
        if profit_2021 <= record.int_field(PROFIT_2020)? {
            continue;
        }
        salaries.push(record.int_field(MEDIAN_SALARY)? as f64);
        profits.push(profit_2021 as f64);
    }

    if salaries.is_empty() {
        return Ok(0.0);
    }

    let n = salaries.len() as f64;
    let mean_x = salaries.iter().sum::<f64>() / n;
    let mean_y = profits.iter().sum::<f64>() / n;

    let numerator: f64 = salaries
        .iter()
        .zip(&profits)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let sum_x_sq: f64 = salaries.iter().map(|x| (x - mean_x).powi(2)).sum();
    let sum_y_sq: f64 = profits.iter().map(|y| (y - mean_y).powi(2)).sum();

    if sum_x_sq == 0.0 || sum_y_sq == 0.0 {
        return Ok(0.0);
    }

    Ok(round4(numerator / (sum_x_sq * sum_y_sq).sqrt()))
}
