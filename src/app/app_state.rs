use crate::config::OptionsInput;
use crate::dom::{Document, DomEvent, ElementId};
use crate::registry::SuggestRegistry;
use crate::suggest::{DomainSuggest, RenderedList};

/// Terminal host for a single email input
///
/// Plays the browser's part: owns the document, forwards key and mouse
/// events to the attached widget and applies default actions it does not
/// prevent.
#[derive(Debug)]
pub struct App {
    pub document: Document,
    pub registry: SuggestRegistry,
    pub input: ElementId,
    /// Cursor position in characters
    pub cursor: usize,
    pub warning: Option<String>,
    pub list_layout: Option<RenderedList>,
    pub should_quit: bool,
    pub submitted: bool,
}

impl App {
    pub fn new(options: impl Into<OptionsInput>, data: &[(String, String)], value: &str) -> Self {
        let mut document = Document::new();
        let input = document.create_element("input");
        let body = document.body();
        document.append_child(body, input);
        for (key, val) in data {
            document.set_attribute(input, &format!("data-{}", key), val);
        }

        let mut registry = SuggestRegistry::new();
        registry.attach(&mut document, input, options);

        document.set_value(input, value);
        document.focus(input);

        let mut app = Self {
            document,
            registry,
            input,
            cursor: value.chars().count(),
            warning: None,
            list_layout: None,
            should_quit: false,
            submitted: false,
        };
        app.sync_suggestions();
        app
    }

    pub fn widget(&self) -> Option<&DomainSuggest> {
        self.registry.get(self.input)
    }

    pub fn value(&self) -> &str {
        self.document.value(self.input)
    }

    pub fn set_value(&mut self, value: &str) {
        self.document.set_value(self.input, value);
    }

    pub fn domains(&self) -> &[String] {
        self.widget()
            .map(|w| w.config().domains.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_list_visible(&self) -> bool {
        self.widget()
            .is_some_and(|w| w.is_list_visible(&self.document))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The accepted address, once the user submitted it
    pub fn submitted_value(&self) -> Option<&str> {
        self.submitted.then(|| self.value())
    }

    pub fn dispatch(&mut self, event: &mut DomEvent) -> bool {
        self.registry.dispatch(&mut self.document, event)
    }

    /// Let the widget catch up with a value it did not see typed
    fn sync_suggestions(&mut self) {
        let mut up = DomEvent::key_up(self.input, 0);
        self.dispatch(&mut up);
    }

    pub(super) fn char_len(&self) -> usize {
        self.value().chars().count()
    }

    pub(super) fn byte_offset(&self, char_index: usize) -> usize {
        let value = self.value();
        value
            .char_indices()
            .nth(char_index)
            .map_or(value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
