//! HTML document emission: a shared page shell plus one entry point per
//! pipeline. The emitted documents are self-contained (embedded styling and,
//! for tables, an embedded controller script) with no external references.

use serde_json::Value;

use crate::{engine::ViewerOptions, models::RecordSet};

mod table;
mod tree;

pub use self::table::{render_table, SortDirection, TableModel};
pub use self::tree::render_tree;

pub(crate) fn json_document(value: &Value, options: &ViewerOptions) -> String {
  page_shell("JSON Tree View", TREE_CSS, &tree::render_tree(value, options))
}

pub(crate) fn csv_document(records: &RecordSet) -> String {
  page_shell("CSV Table View", TABLE_CSS, &table::render_table(records))
}

/// Wrap a rendered body in the full document: head, embedded theme CSS
/// (host theme variables with plain fallbacks, so the page works in any
/// sandboxed surface), and the view title.
fn page_shell(title: &str, view_css: &str, body: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<style>
{BASE_CSS}
{view_css}
</style>
</head>
<body>
<h2>{title}</h2>
{body}
</body>
</html>
"#
  )
}

const BASE_CSS: &str = r#":root { color-scheme: light dark; }

body {
  font-family: var(--vscode-editor-font-family, sans-serif);
  color: var(--vscode-editor-foreground);
  background-color: var(--vscode-editor-background);
  padding: 1rem;
  line-height: 1.4;
}

h2 {
  color: var(--vscode-editor-foreground);
  border-bottom: 1px solid var(--vscode-editorWidget-border, #555);
  padding-bottom: 0.3rem;
  margin-bottom: 1rem;
}"#;

const TREE_CSS: &str = r#"details {
  margin-left: 1rem;
  border-left: 1px solid var(--vscode-editorWidget-border, #444);
  padding-left: 0.5rem;
}

summary {
  cursor: pointer;
  color: var(--vscode-textLink-foreground, #569CD6);
  font-weight: 500;
}

summary:hover {
  background: var(--vscode-list-hoverBackground, rgba(255,255,255,0.05));
}

.key { color: var(--vscode-editor-foreground, #ccc); }
.value-string { color: var(--vscode-terminal-ansiGreen, #6A9955); }
.value-number { color: var(--vscode-terminal-ansiCyan, #4FC1FF); }
.value-boolean { color: var(--vscode-terminal-ansiYellow, #DCDCAA); }
.value-null { color: var(--vscode-terminal-ansiMagenta, #C586C0); }
.primitive { margin-left: 1.5rem; }
.bracket { color: var(--vscode-editorLineNumber-activeForeground, #888); }"#;

const TABLE_CSS: &str = r#"input, select, button {
  padding: 6px 10px;
  background: var(--vscode-input-background);
  color: var(--vscode-input-foreground);
  border: 1px solid var(--vscode-input-border);
  border-radius: 4px;
}

input { width: 40%; }
select { width: 40%; }

button {
  cursor: pointer;
  background: var(--vscode-button-background);
  color: var(--vscode-button-foreground);
  border: none;
}

button:hover {
  background: var(--vscode-button-hoverBackground);
}

table {
  border-collapse: collapse;
  width: 100%;
}

th, td {
  border: 1px solid var(--vscode-editorWidget-border);
  padding: 6px 10px;
  text-align: left;
}

th {
  background: var(--vscode-sideBar-background);
}

tr:nth-child(even) {
  background: var(--vscode-editorWidget-background);
}

tr:hover {
  background: var(--vscode-list-hoverBackground, rgba(255,255,255,0.05));
}

.controls {
  display: flex;
  gap: 0.5rem;
  align-items: center;
  flex-wrap: wrap;
  margin-bottom: 1rem;
}"#;
