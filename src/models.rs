use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
  Json,
  Csv,
  Unknown,
}

/// One row of tabular data.
///
/// Fields are positional and aligned with `RecordSet::headers`: a row shorter
/// than the header set simply has the trailing columns absent, and anything
/// beyond the header set was dropped at parse time (never rendered).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
  pub fields: Vec<String>,
}

impl Record {
  /// Field for the given header column, or `None` if the row is short.
  pub fn field(&self, column_idx: usize) -> Option<&str> {
    self.fields.get(column_idx).map(String::as_str)
  }
}

/// Ordered rows sharing a column set.
///
/// The column set is defined by the header row alone; later rows may be
/// ragged without error (missing columns render as empty cells).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordSet {
  pub headers: Vec<String>,
  pub records: Vec<Record>,
}

impl RecordSet {
  /// True when there is nothing to tabulate (no data rows at all).
  pub fn is_empty(&self) -> bool {
    self.headers.is_empty() || self.records.is_empty()
  }
}
