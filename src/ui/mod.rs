//! UI-Schicht: Input-Routing, Toolbar und Status-Bar.

pub mod input;
pub mod keyboard;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
