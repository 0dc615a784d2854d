use sv_core::Viewer;

fn main() -> Result<(), String> {
  let path = std::env::args()
    .nth(1)
    .ok_or_else(|| "usage: cargo run --example smoke_render -- <path-to-file>".to_string())?;

  let text = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
  let viewer = Viewer::default();
  let doc = viewer.render_path(&path, &text).map_err(|e| e.to_string())?;
  println!("{doc}");
  Ok(())
}
