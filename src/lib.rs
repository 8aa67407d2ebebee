//! Email input with `@`-triggered domain suggestions
//!
//! [`suggest::DomainSuggest`] is the widget itself. It runs against the
//! in-memory [`dom::Document`], and [`registry::SuggestRegistry`] keeps it to
//! one instance per input element. [`app::App`] hosts it in a terminal.

pub mod app;
pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod registry;
pub mod suggest;
pub mod widgets;


pub use error::SuggestError;
