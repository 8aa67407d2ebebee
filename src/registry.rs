//! Element to widget side table
//!
//! Attaching is attach-if-absent: the first call for an element builds the
//! widget, later calls hand back the existing one untouched.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::config::{OptionsInput, SuggestOptions};
use crate::dom::{Document, DomEvent, ElementId};
use crate::suggest::DomainSuggest;

#[derive(Debug, Default)]
pub struct SuggestRegistry {
    instances: HashMap<ElementId, DomainSuggest>,
}

impl SuggestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(
        &mut self,
        doc: &mut Document,
        element: ElementId,
        options: impl Into<OptionsInput>,
    ) -> &mut DomainSuggest {
        match self.instances.entry(element) {
            Entry::Occupied(entry) => {
                log::debug!("{:?} already has domain suggestions, skipping attach", element);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let config = SuggestOptions::resolve(&options.into(), &doc.data(element));
                entry.insert(DomainSuggest::attach(doc, element, config))
            }
        }
    }

    pub fn get(&self, element: ElementId) -> Option<&DomainSuggest> {
        self.instances.get(&element)
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut DomainSuggest> {
        self.instances.get_mut(&element)
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        self.instances.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Route an event to the widget owning its target
    pub fn dispatch(&mut self, doc: &mut Document, event: &mut DomEvent) -> bool {
        self.instances
            .values_mut()
            .find(|widget| widget.owns(doc, event.target))
            .is_some_and(|widget| widget.dispatch(doc, event))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
