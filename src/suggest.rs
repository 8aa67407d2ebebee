//! Domain suggestion widget
//!
//! Attached to one input element: typing `@` opens a list of configured
//! domains, the text after `@` filters it, arrow keys move the highlight and
//! Enter (or a click) completes the address.

mod filter;
mod keys;
mod suggest_render;
mod suggest_state;

pub use filter::DomainFilter;
pub use keys::{CHAR_AT, CHAR_SPACE, KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_UP, KeyAction};
pub use suggest_render::{RenderedList, render_list, suggestion_list_size};
pub use suggest_state::{DomainOption, DomainSuggest, HIDE_CLASS, SELECTED_CLASS};
