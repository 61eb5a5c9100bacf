use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::AnalysisError;
use crate::load::{load_dataset, Dataset};
use crate::stats::{
    employee_extremes, profit_change_ratio, salary_profit_correlation, salary_std_devs,
    EmployeeExtremes, ProfitRatio, SalaryDispersion,
};

/// Results of the four per-country queries over one dataset load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryReport {
    pub country: String,
    /// Extremal employee counts inside the founding window; `None` when no
    /// organization matched.
    pub extremes: Option<EmployeeExtremes>,
    pub dispersion: SalaryDispersion,
    pub profit_ratio: ProfitRatio,
    pub correlation: f64,
}

/// Load `source` once and run every query against the shared dataset.
///
/// All-or-nothing: the first structural or parse error aborts the whole
/// call with no partial results.
pub fn analyze<P: AsRef<Path>>(source: P, country: &str) -> Result<CountryReport, AnalysisError> {
    let dataset = load_dataset(source)?;
    run_queries(&dataset, country)
}

/// The query fan-out behind [`analyze`], split out so callers holding an
/// already-loaded [`Dataset`] can reuse it across countries.
pub fn run_queries(dataset: &Dataset, country: &str) -> Result<CountryReport, AnalysisError> {
    let extremes = employee_extremes(dataset, country)?;
    let dispersion = salary_std_devs(dataset, country)?;
    let profit_ratio = profit_change_ratio(dataset, country)?;
    let correlation = salary_profit_correlation(dataset, country)?;
    info!(country, rows = dataset.len(), "analysis complete");

    Ok(CountryReport {
        country: country.to_string(),
        extremes,
        dispersion,
        profit_ratio,
        correlation,
    })
}

impl fmt::Display for CountryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.country)?;
        match &self.extremes {
            Some(e) => {
                writeln!(f, "  Most employees (founded 1981-2000): {}", e.largest)?;
                writeln!(f, "  Fewest employees (founded 1981-2000): {}", e.smallest)?;
            }
            None => writeln!(f, "  No organizations founded 1981-2000")?,
        }
        writeln!(f, "  Median salary std dev: {:.4}", self.dispersion.country)?;
        writeln!(
            f,
            "  Median salary std dev (all countries): {:.4}",
            self.dispersion.global
        )?;
        writeln!(f, "  Profit increase/decrease ratio: {}", self.profit_ratio)?;
        write!(f, "  Salary/2021-profit correlation: {:.4}", self.correlation)
    }
}
