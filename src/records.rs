use crate::{
  engine::ViewerError,
  models::{Record, RecordSet},
};

impl RecordSet {
  /// Parse CSV text into a record set.
  ///
  /// - The first line is the header row; a UTF-8 BOM is stripped first.
  /// - Empty header names are normalized to generic `col_N` names.
  /// - Ragged rows are tolerated: short rows leave columns absent, and
  ///   fields beyond the header set are dropped.
  pub fn from_csv(text: &str) -> Result<RecordSet, ViewerError> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
      return Ok(RecordSet {
        headers: vec![],
        records: vec![],
      });
    }

    let mut reader = csv::ReaderBuilder::new()
      .flexible(true)
      .from_reader(text.as_bytes());

    let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    for (i, h) in headers.iter_mut().enumerate() {
      if h.trim().is_empty() {
        *h = format!("col_{i}");
      }
    }

    let mut records = Vec::new();
    for row in reader.records() {
      let row = row?;
      let fields: Vec<String> = row
        .iter()
        .take(headers.len())
        .map(str::to_string)
        .collect();
      records.push(Record { fields });
    }

    Ok(RecordSet { headers, records })
  }
}
