use std::fmt;

use serde::Serialize;

use crate::error::AnalysisError;
use crate::load::Dataset;
use crate::stats::{round4, COUNTRY, PROFIT_2020, PROFIT_2021};

/// Outcome of the profit-change ratio.
///
/// `Undefined` is a valid answer, not an error: it reports that no aggregate
/// decrease exists to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ProfitRatio {
    /// Summed increases divided by summed absolute decreases.
    Ratio(f64),
    /// The denominator was zero.
    Undefined,
}

impl fmt::Display for ProfitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitRatio::Ratio(r) => write!(f, "{:.4}", r),
            ProfitRatio::Undefined => write!(f, "undefined (no aggregate decrease)"),
        }
    }
}

/// Ratio of aggregate profit increases to aggregate profit decreases
/// between 2020 and 2021 for organizations of `country`.
///
/// A zero delta joins neither sum.
pub fn profit_change_ratio(
    data: &Dataset,
    country: &str,
) -> Result<ProfitRatio, AnalysisError> {
    let mut increases: i64 = 0;
    let mut decreases: i64 = 0;

    for record in data.records() {
        if record.require(COUNTRY)? != country {
            continue;
        }
        let delta = record.int_field(PROFIT_2021)? - record.int_field(PROFIT_2020)?;
        if delta > 0 {
            increases += delta;
        } else if delta < 0 {
            decreases += delta.abs();
        }
    }

    if decreases == 0 {
        return Ok(ProfitRatio::Undefined);
    }
    Ok(ProfitRatio::Ratio(round4(increases as f64 / decreases as f64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(&str, &str, &str)]) -> Dataset {
        let headers = vec![
            "Country".into(),
            "Profits in 2020(Million)".into(),
            "Profits in 2021(Million)".into(),
        ];
        let rows = rows
            .iter()
            .map(|(country, p2020, p2021)| {
                vec![country.to_string(), p2020.to_string(), p2021.to_string()]
            })
            .collect();
        Dataset::new(headers, rows)
    }

    #[test]
    fn sums_increases_over_absolute_decreases() {
        // deltas +5, +3, -4 -> 8 / 4
        let data = dataset(&[("X", "10", "15"), ("X", "20", "23"), ("X", "30", "26")]);
        assert_eq!(
            profit_change_ratio(&data, "X").unwrap(),
            ProfitRatio::Ratio(2.0)
        );
    }

    #[test]
    fn no_decrease_is_undefined() {
        let data = dataset(&[("X", "10", "15"), ("X", "20", "23")]);
        assert_eq!(
            profit_change_ratio(&data, "X").unwrap(),
            ProfitRatio::Undefined
        );
    }

    #[test]
    fn zero_deltas_join_neither_sum() {
        // deltas 0 and +5: still no decrease, so still undefined
        let data = dataset(&[("X", "10", "10"), ("X", "20", "25")]);
        assert_eq!(
            profit_change_ratio(&data, "X").unwrap(),
            ProfitRatio::Undefined
        );
    }

    #[test]
    fn empty_country_subset_is_undefined() {
        let data = dataset(&[("Y", "10", "5")]);
        assert_eq!(
            profit_change_ratio(&data, "X").unwrap(),
            ProfitRatio::Undefined
        );
    }

    #[test]
    fn ratio_rounds_to_four_places() {
        // deltas +1, -3 -> 1/3
        let data = dataset(&[("X", "10", "11"), ("X", "20", "17")]);
        assert_eq!(
            profit_change_ratio(&data, "X").unwrap(),
            ProfitRatio::Ratio(0.3333)
        );
    }

    #[test]
    fn malformed_profit_propagates() {
        let data = dataset(&[("X", "ten", "15")]);
        assert!(matches!(
            profit_change_ratio(&data, "X"),
            Err(AnalysisError::MalformedField { .. })
        ));
    }
}
