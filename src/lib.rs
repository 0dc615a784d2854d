mod engine;
mod escape;
mod models;
mod records;
mod render;

pub use crate::engine::{detect_kind, Viewer, ViewerError, ViewerOptions};
pub use crate::escape::escape_html;
pub use crate::models::{DocumentKind, Record, RecordSet};
pub use crate::render::{render_table, render_tree, SortDirection, TableModel};
