use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::AnalysisError;
use crate::load::Dataset;
use crate::stats::{COUNTRY, EMPLOYEES, FOUNDED, NAME};

/// Founding-year window the employee scan is restricted to (closed range).
const FOUNDED_WINDOW: RangeInclusive<i64> = 1981..=2000;

/// Names of the organizations holding the largest and smallest employee
/// counts among a country's matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeExtremes {
    pub largest: String,
    pub smallest: String,
}

/// Find the organizations of `country`, founded inside the window, with the
/// most and fewest employees.
///
/// Strict comparisons: the first organization to reach an extremal value
/// keeps it, a later tie does not take over. `None` when nothing matches
/// the filter.
pub fn employee_extremes(
    data: &Dataset,
    country: &str,
) -> Result<Option<EmployeeExtremes>, AnalysisError> {
    let mut largest: Option<(i64, &str)> = None;
    let mut smallest: Option<(i64, &str)> = None;

    for record in data.records() {
        if record.require(COUNTRY)? != country {
            continue;
        }
        if !FOUNDED_WINDOW.contains(&record.int_field(FOUNDED)?) {
            continue;
        }

        let employees = record.int_field(EMPLOYEES)?;
        let name = record.require(NAME)?;
        if largest.map_or(true, |(best, _)| employees > best) {
            largest = Some((employees, name));
        }
        if smallest.map_or(true, |(best, _)| employees < best) {
            smallest = Some((employees, name));
        }
    }

    // Both track the same filtered pass, so they are Some or None together.
    Ok(largest
        .zip(smallest)
        .map(|((_, max_name), (_, min_name))| EmployeeExtremes {
            largest: max_name.to_string(),
            smallest: min_name.to_string(),
        }))
}
