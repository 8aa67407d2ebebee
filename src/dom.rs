//! In-memory DOM environment
//!
//! The suggestion widget never renders anything itself: it creates elements,
//! toggles state classes and reads text through this environment. Hosts (the
//! terminal app, tests) drive it by dispatching [`DomEvent`]s and read it back
//! to draw.

mod document;
mod event;

pub use document::{Document, Element, ElementId};
pub use event::{DomEvent, EventKind};
