use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
  models::{DocumentKind, RecordSet},
  render,
};

#[derive(Debug, Error)]
pub enum ViewerError {
  #[error("invalid JSON: {0}")]
  Parse(String),
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),
  #[error("unsupported document kind: {0:?}")]
  UnsupportedKind(DocumentKind),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
  /// Whether tree nodes start in the expanded state. A presentation default
  /// only; the renderer keeps no collapse state.
  pub default_expanded: bool,
}

impl Default for ViewerOptions {
  fn default() -> Self {
    Self {
      default_expanded: true,
    }
  }
}

/// Map a file path to a document kind by its (lowercased) extension.
pub fn detect_kind(path: &Path) -> DocumentKind {
  let ext = path
    .extension()
    .and_then(|s| s.to_str())
    .unwrap_or("")
    .to_ascii_lowercase();
  match ext.as_str() {
    "json" => DocumentKind::Json,
    "csv" => DocumentKind::Csv,
    _ => DocumentKind::Unknown,
  }
}

/// Stateless render façade: raw text + a discriminator in, one self-contained
/// HTML document out.
///
/// Every call parses fresh input and returns a fresh document; there is no
/// cache and no cross-call state, so concurrent use needs no coordination.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
  options: ViewerOptions,
}

impl Viewer {
  pub fn new(options: ViewerOptions) -> Self {
    Self { options }
  }

  /// Render `text` through the pipeline selected by `kind`.
  ///
  /// JSON parse failure aborts with the parser's diagnostic (no partial
  /// tree); an unknown kind is rejected before any parsing is attempted.
  pub fn render_text(&self, kind: DocumentKind, text: &str) -> Result<String, ViewerError> {
    match kind {
      DocumentKind::Json => {
        let value: serde_json::Value =
          serde_json::from_str(text).map_err(|e| ViewerError::Parse(e.to_string()))?;
        Ok(render::json_document(&value, &self.options))
      }
      DocumentKind::Csv => {
        let records = RecordSet::from_csv(text)?;
        Ok(render::csv_document(&records))
      }
      DocumentKind::Unknown => Err(ViewerError::UnsupportedKind(kind)),
    }
  }

  /// Convenience for hosts that hold a file path: detect the kind from the
  /// extension, then render.
  pub fn render_path(&self, path: impl AsRef<Path>, text: &str) -> Result<String, ViewerError> {
    self.render_text(detect_kind(path.as_ref()), text)
  }
}
