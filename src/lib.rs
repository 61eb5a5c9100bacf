//! Descriptive statistics over a comma-delimited table of organizations.
//!
//! One load, four per-country queries: extremal employee counts inside a
//! founding-year window, salary dispersion (country vs. global), the ratio
//! of aggregate profit increases to decreases, and a salary/profit
//! correlation over the profit-growing subset.

pub mod error;
pub mod load;
pub mod report;
pub mod stats;

pub use error::AnalysisError;
pub use load::{load_dataset, Dataset, Record};
pub use report::{analyze, run_queries, CountryReport};
pub use stats::{EmployeeExtremes, ProfitRatio, SalaryDispersion};
