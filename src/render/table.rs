use serde::{Deserialize, Serialize};

use crate::{escape::escape_html, models::RecordSet};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
  Ascending,
  Descending,
}

/// In-process model of the table controller.
///
/// The inline script baked into the emitted document implements exactly this
/// contract (substring visibility filter, stable case-insensitive
/// lexicographic sort with a direction toggle), so the behavior is testable
/// here without a rendering surface. Rows hold the raw cell text that the
/// rendered cells display, padded with empty strings for absent fields;
/// escaping happens only at markup emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
  headers: Vec<String>,
  rows: Vec<Vec<String>>,
}

impl TableModel {
  pub fn from_records(records: &RecordSet) -> Self {
    let rows = records
      .records
      .iter()
      .map(|r| {
        (0..records.headers.len())
          .map(|i| r.field(i).unwrap_or("").to_string())
          .collect()
      })
      .collect();
    Self {
      headers: records.headers.clone(),
      rows,
    }
  }

  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  pub fn rows(&self) -> &[Vec<String>] {
    &self.rows
  }

  /// Reorder all rows by the named column's cell text, case-insensitive
  /// lexicographic (code-unit order, deliberately not locale-collated and
  /// not numeric-aware). The sort is stable: equal keys keep their prior
  /// relative order. An unknown column name is a no-op.
  ///
  /// Sorting is independent of any filter: hidden rows are reordered too.
  pub fn sort_rows(&mut self, column: &str, direction: SortDirection) {
    let Some(idx) = self.headers.iter().position(|h| h == column) else {
      return;
    };
    self.rows.sort_by(|a, b| {
      let a = a[idx].to_lowercase();
      let b = b[idx].to_lowercase();
      match direction {
        SortDirection::Ascending => a.cmp(&b),
        SortDirection::Descending => b.cmp(&a),
      }
    });
  }

  /// Visibility mask for a filter query: a row is visible iff at least one
  /// cell contains the query as a case-insensitive substring. The empty
  /// query shows everything. Filtering never reorders or removes rows.
  pub fn visible_rows(&self, query: &str) -> Vec<bool> {
    if query.is_empty() {
      return vec![true; self.rows.len()];
    }
    let needle = query.to_lowercase();
    self
      .rows
      .iter()
      .map(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)))
      .collect()
  }
}

/// Render a record set as a filterable, sortable table fragment with its
/// embedded controller script. An empty record set yields a "no data" notice
/// instead of a table.
pub fn render_table(records: &RecordSet) -> String {
  if records.is_empty() {
    return "<p>No CSV data found.</p>".to_string();
  }

  let model = TableModel::from_records(records);

  let mut options = String::new();
  let mut head_cells = String::new();
  for h in model.headers() {
    let h = escape_html(Some(h));
    options.push_str(&format!(r#"<option value="{h}">{h}</option>"#));
    head_cells.push_str(&format!("<th>{h}</th>"));
  }

  let mut body_rows = String::new();
  for row in model.rows() {
    body_rows.push_str("<tr>");
    for cell in row {
      body_rows.push_str(&format!("<td>{}</td>", escape_html(Some(cell))));
    }
    body_rows.push_str("</tr>\n");
  }

  format!(
    r#"<div class="controls">
<input type="text" id="filterInput" placeholder="Filter rows..." />
<select id="sortColumn">{options}</select>
<button id="sortToggle" data-dir="">Sort</button>
</div>
<table id="dataTable">
<thead>
<tr>{head_cells}</tr>
</thead>
<tbody>
{body_rows}</tbody>
</table>
<script>
{CONTROLLER_JS}</script>"#
  )
}

// The browser-side mirror of `TableModel`. `Array.prototype.sort` is stable,
// and the comparator is plain code-unit order on lowercased text, matching
// the in-process sort. Filtering toggles `display` only; rows are never
// removed from the document.
const CONTROLLER_JS: &str = r#"const table = document.getElementById('dataTable');
const input = document.getElementById('filterInput');
const select = document.getElementById('sortColumn');
const toggle = document.getElementById('sortToggle');

input.addEventListener('input', () => {
  const term = input.value.toLowerCase();
  table.querySelectorAll('tbody tr').forEach(row => {
    const visible = term === '' || Array.from(row.cells).some(cell =>
      cell.innerText.toLowerCase().includes(term)
    );
    row.style.display = visible ? '' : 'none';
  });
});

function sortTable(direction) {
  const column = select.value;
  const idx = Array.from(table.querySelector('thead tr').cells)
    .findIndex(th => th.textContent === column);
  if (idx < 0) return;

  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.rows);

  rows.sort((a, b) => {
    const A = a.cells[idx].innerText.toLowerCase();
    const B = b.cells[idx].innerText.toLowerCase();
    return (A < B ? -1 : A > B ? 1 : 0) * direction;
  });

  rows.forEach(r => tbody.appendChild(r));
}

function applySort() {
  sortTable(toggle.dataset.dir === 'asc' ? 1 : -1);
}

// First press sorts ascending; afterwards each press flips the direction.
toggle.addEventListener('click', () => {
  const dir = toggle.dataset.dir === 'asc' ? 'desc' : 'asc';
  toggle.dataset.dir = dir;
  toggle.textContent = dir === 'asc' ? '▲ Asc' : '▼ Desc';
  applySort();
});

// Changing the column re-sorts only once a direction has been chosen.
select.addEventListener('change', () => {
  if (toggle.dataset.dir !== '') applySort();
});
"#;
