//! Layer-übergreifende Typen: Optionen und Render-Szene.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{CircleDrawable, LineDrawable, PathDrawable, RenderScene};
