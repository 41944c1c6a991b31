//! Rendering: zeichnet die pro Frame abgeleitete Szene.

pub mod painter;

pub use painter::paint_scene;
