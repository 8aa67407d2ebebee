mod app_events;
mod app_render;
mod app_state;
mod keymap;
mod mouse_click;
mod session;

// Re-export public types
pub use app_state::App;
pub use keymap::dom_key_code;
pub use session::run_session;
