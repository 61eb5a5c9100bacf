use serde::Serialize;

use crate::error::AnalysisError;
use crate::load::Dataset;
use crate::stats::{round4, COUNTRY, MEDIAN_SALARY};

/// Sample standard deviations of the median salary: one for a single
/// country's organizations, one for the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryDispersion {
    pub country: f64,
    pub global: f64,
}

/// Compute both salary standard deviations in one pass over the rows.
pub fn salary_std_devs(
    data: &Dataset,
    country: &str,
) -> Result<SalaryDispersion, AnalysisError> {
    let mut country_salaries = Vec::new();
    let mut all_salaries = Vec::with_capacity(data.len());

    for record in data.records() {
        let salary = record.int_field(MEDIAN_SALARY)? as f64;
        if record.require(COUNTRY)? == country {
            country_salaries.push(salary);
        }
        all_salaries.push(salary);
    }

    Ok(SalaryDispersion {
        country: round4(sample_std_dev(&country_salaries)),
        global: round4(sample_std_dev(&all_salaries)),
    })
}

/// Sample standard deviation (n-1 denominator). Fewer than two values is
/// insufficient data and reports 0; a non-positive variance reports 0 too.
fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance =
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    if variance > 0.0 {
        variance.sqrt()
    } else {
        0.0
    }
}
