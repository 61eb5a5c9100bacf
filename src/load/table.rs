use crate::error::AnalysisError;

/// In-memory table produced by one load.
///
/// Column names come from the header line of the source file; each row holds
/// the raw string values of one data line, index-aligned with `headers`. The
/// loader rejects any line that would break that alignment, so `Record`
/// lookups never go out of bounds. Nothing is parsed until a query asks.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Iterate the rows as [`Record`] views, in source order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            headers: &self.headers,
            values,
        })
    }
}

/// One row of a [`Dataset`], with by-name field access.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Raw string value of `field`, if the header declares it.
    pub fn field(&self, field: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == field)
            .map(|i| self.values[i].as_str())
    }

    /// Like [`field`](Self::field), but a missing header name is an error.
    pub fn require(&self, field: &str) -> Result<&'a str, AnalysisError> {
        self.field(field).ok_or_else(|| AnalysisError::MissingField {
            field: field.to_string(),
        })
    }

    /// Parse `field` as an integer. Anything `str::parse` rejects surfaces
    /// as `MalformedField`.
    pub fn int_field(&self, field: &str) -> Result<i64, AnalysisError> {
        let raw = self.require(field)?;
        raw.parse().map_err(|_| AnalysisError::MalformedField {
            field: field.to_string(),
            value: raw.to_string(),
        })
    }
}
