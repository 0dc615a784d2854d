use serde_json::Value;

use crate::{engine::ViewerOptions, escape::escape_html};

/// Render a parsed JSON value as a nested tree of collapsible blocks.
///
/// Arrays and objects emit one `<details>` block per child, labeled `[i]`
/// (array index, class `bracket`) or `key:` (object key, class `key`), in
/// input order (object keys are never sorted). Scalars emit a leaf `<div>`
/// tagged with exactly one of the four value classes. Keys and scalar text
/// are escaped before emission.
///
/// Traversal uses an explicit work stack rather than call recursion: parsed
/// JSON cannot be cyclic, but nesting depth is unbounded and must not be able
/// to exhaust the call stack.
pub fn render_tree(value: &Value, options: &ViewerOptions) -> String {
  let open = if options.default_expanded { " open" } else { "" };

  enum Step<'a> {
    Node(&'a Value),
    Markup(String),
    Lit(&'static str),
  }

  let mut out = String::new();
  let mut stack = vec![Step::Node(value)];
  while let Some(step) = stack.pop() {
    match step {
      Step::Lit(text) => out.push_str(text),
      Step::Markup(text) => out.push_str(&text),
      Step::Node(node) => match node {
        Value::Array(items) => {
          out.push_str("<div>");
          stack.push(Step::Lit("</div>"));
          // Reverse push so children pop in index order.
          for (i, item) in items.iter().enumerate().rev() {
            stack.push(Step::Lit("</details>"));
            stack.push(Step::Node(item));
            stack.push(Step::Markup(format!(
              r#"<details{open}><summary><span class="bracket">[{i}]</span></summary>"#
            )));
          }
        }
        Value::Object(entries) => {
          out.push_str("<div>");
          stack.push(Step::Lit("</div>"));
          for (key, child) in entries.iter().rev() {
            let key = escape_html(Some(key));
            stack.push(Step::Lit("</details>"));
            stack.push(Step::Node(child));
            stack.push(Step::Markup(format!(
              r#"<details{open}><summary><span class="key">{key}</span>:</summary>"#
            )));
          }
        }
        Value::String(s) => {
          let text = escape_html(Some(s));
          out.push_str(&format!(
            r#"<div class="primitive value-string">"{text}"</div>"#
          ));
        }
        Value::Number(n) => {
          out.push_str(&format!(r#"<div class="primitive value-number">{n}</div>"#));
        }
        Value::Bool(b) => {
          out.push_str(&format!(
            r#"<div class="primitive value-boolean">{b}</div>"#
          ));
        }
        Value::Null => {
          out.push_str(r#"<div class="primitive value-null">null</div>"#);
        }
      },
    }
  }
  out
}
