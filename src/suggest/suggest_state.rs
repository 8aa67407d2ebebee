use crate::config::SuggestOptions;
use crate::dom::{Document, DomEvent, ElementId, EventKind};

use super::filter::DomainFilter;
use super::keys::{CHAR_AT, CHAR_SPACE, KeyAction};

/// State class on the list and on filtered-out options
pub const HIDE_CLASS: &str = "hide";
/// State class on the highlighted option
pub const SELECTED_CLASS: &str = "selected";

type Handler = fn(&mut DomainSuggest, &mut Document, &mut DomEvent);

/// Which widget-owned element a subscription listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Input,
    List,
}

#[derive(Debug, Clone, Copy)]
struct Subscription {
    kind: EventKind,
    scope: Scope,
    handler: Handler,
}

const SUBSCRIPTIONS: [Subscription; 4] = [
    Subscription {
        kind: EventKind::KeyDown,
        scope: Scope::Input,
        handler: DomainSuggest::on_keydown,
    },
    Subscription {
        kind: EventKind::KeyUp,
        scope: Scope::Input,
        handler: DomainSuggest::on_keyup,
    },
    Subscription {
        kind: EventKind::KeyPress,
        scope: Scope::Input,
        handler: DomainSuggest::on_keypress,
    },
    Subscription {
        kind: EventKind::Click,
        scope: Scope::List,
        handler: DomainSuggest::on_click,
    },
];

/// Snapshot of one suggestion entry, for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOption {
    pub element: ElementId,
    pub domain: String,
    pub visible: bool,
    pub selected: bool,
}

/// One widget instance bound to one input element
///
/// Visibility and selection live in the document as `hide` / `selected`
/// classes; the instance only remembers which elements it created.
#[derive(Debug, Clone)]
pub struct DomainSuggest {
    input: ElementId,
    wrapper: ElementId,
    list: ElementId,
    options: Vec<ElementId>,
    config: SuggestOptions,
}

impl DomainSuggest {
    /// Wrap `input`, add the hidden suggestion list after it and fill it
    pub fn attach(doc: &mut Document, input: ElementId, config: SuggestOptions) -> Self {
        doc.set_attribute(input, "autocomplete", "off");
        doc.set_attribute(input, "spellcheck", "false");

        let wrapper = doc.create_element("div");
        doc.add_class(wrapper, &config.class);
        doc.wrap(input, wrapper);

        let list = doc.create_element("ul");
        doc.add_class(list, HIDE_CLASS);
        doc.insert_after(input, list);

        let options = config
            .domains
            .iter()
            .map(|domain| {
                let option = doc.create_element("li");
                doc.set_text(option, domain);
                doc.append_child(list, option);
                option
            })
            .collect();

        log::debug!(
            "Attached domain suggestions to {:?} ({} domains)",
            input,
            config.domains.len()
        );

        Self {
            input,
            wrapper,
            list,
            options,
            config,
        }
    }

    pub fn input(&self) -> ElementId {
        self.input
    }

    pub fn wrapper(&self) -> ElementId {
        self.wrapper
    }

    pub fn list(&self) -> ElementId {
        self.list
    }

    pub fn options(&self) -> &[ElementId] {
        &self.options
    }

    pub fn config(&self) -> &SuggestOptions {
        &self.config
    }

    /// True when `target` is the input, the list, or anything inside the list
    pub fn owns(&self, doc: &Document, target: ElementId) -> bool {
        target == self.input || doc.contains(self.list, target)
    }

    fn scope_element(&self, scope: Scope) -> ElementId {
        match scope {
            Scope::Input => self.input,
            Scope::List => self.list,
        }
    }

    /// Run every handler subscribed to this event; false when none matched
    pub fn dispatch(&mut self, doc: &mut Document, event: &mut DomEvent) -> bool {
        let mut handled = false;
        for sub in SUBSCRIPTIONS {
            if sub.kind == event.kind && doc.contains(self.scope_element(sub.scope), event.target) {
                (sub.handler)(self, doc, event);
                handled = true;
            }
        }
        handled
    }

    // Event handlers

    pub fn on_keydown(&mut self, doc: &mut Document, event: &mut DomEvent) {
        match KeyAction::from_key_code(event.key_code) {
            Some(KeyAction::Commit) => self.commit(doc, event),
            Some(KeyAction::Dismiss) => self.dismiss(doc, event),
            Some(KeyAction::SelectPrevious) => self.select_previous(doc, event),
            Some(KeyAction::SelectNext) => self.select_next(doc, event),
            None => {}
        }
    }

    /// Re-filter after the host applied the keystroke
    pub fn on_keyup(&mut self, doc: &mut Document, event: &mut DomEvent) {
        if KeyAction::skips_filter(event.key_code) {
            return;
        }
        let value = doc.value(self.input).to_string();
        let filter = DomainFilter::from_value(&value);
        if let Some(filter) = &filter {
            for &option in &self.options {
                let visible = filter.matches(&doc.text(option));
                doc.toggle_class(option, HIDE_CLASS, !visible);
            }
        }
        doc.toggle_class(self.list, HIDE_CLASS, filter.is_none());
    }

    /// Gate characters before insertion: no leading or second `@`, no spaces
    pub fn on_keypress(&mut self, doc: &mut Document, event: &mut DomEvent) {
        let value = doc.value(self.input);
        let sign_was_present = value.contains('@');
        match event.key_code {
            CHAR_AT if sign_was_present || value.is_empty() => event.prevent_default(),
            CHAR_SPACE => event.prevent_default(),
            _ => {}
        }
    }

    pub fn on_click(&mut self, doc: &mut Document, event: &mut DomEvent) {
        event.prevent_default();
        let option = self.option_at(doc, event.target);
        self.set(doc, option);
    }

    // Actions

    pub fn commit(&mut self, doc: &mut Document, event: &mut DomEvent) {
        event.prevent_default();
        let selected = self.selected(doc);
        self.set(doc, selected);
    }

    pub fn dismiss(&mut self, doc: &mut Document, event: &mut DomEvent) {
        event.prevent_default();
        doc.add_class(self.list, HIDE_CLASS);
    }

    pub fn select_previous(&mut self, doc: &mut Document, event: &mut DomEvent) {
        if !self.is_list_visible(doc) {
            return;
        }
        event.prevent_default();
        if let Some(option) = self.prev(doc).or_else(|| self.last(doc)) {
            self.select(doc, option);
        }
    }

    pub fn select_next(&mut self, doc: &mut Document, event: &mut DomEvent) {
        if !self.is_list_visible(doc) {
            return;
        }
        event.prevent_default();
        if let Some(option) = self.next(doc).or_else(|| self.first(doc)) {
            self.select(doc, option);
        }
    }

    // Operations

    /// Highlight `option` and clear the highlight from every sibling
    pub fn select(&self, doc: &mut Document, option: ElementId) {
        let siblings = doc
            .parent(option)
            .map(|parent| doc.children(parent).to_vec())
            .unwrap_or_default();
        for sibling in siblings {
            if sibling != option {
                doc.remove_class(sibling, SELECTED_CLASS);
            }
        }
        doc.add_class(option, SELECTED_CLASS);
    }

    /// Replace everything after the first `@` with the option's domain
    ///
    /// No option means nothing to complete: the value and list stay as they are.
    pub fn set(&self, doc: &mut Document, option: Option<ElementId>) {
        let Some(option) = option else {
            return;
        };
        let domain = doc.text(option);
        let value = doc.value(self.input);
        let user = value.split_once('@').map_or(value, |(user, _)| user);
        let completed = format!("{}@{}", user, domain);

        log::debug!("Completing {:?} to {}", self.input, completed);

        doc.set_value(self.input, &completed);
        doc.focus(self.input);
        doc.add_class(self.list, HIDE_CLASS);
    }

    pub fn is_list_visible(&self, doc: &Document) -> bool {
        !doc.has_class(self.list, HIDE_CLASS)
    }

    fn is_option_visible(doc: &Document, option: ElementId) -> bool {
        !doc.has_class(option, HIDE_CLASS)
    }

    pub fn visible_options(&self, doc: &Document) -> Vec<ElementId> {
        self.options
            .iter()
            .copied()
            .filter(|&o| Self::is_option_visible(doc, o))
            .collect()
    }

    pub fn first(&self, doc: &Document) -> Option<ElementId> {
        self.options
            .iter()
            .copied()
            .find(|&o| Self::is_option_visible(doc, o))
    }

    pub fn last(&self, doc: &Document) -> Option<ElementId> {
        self.options
            .iter()
            .rev()
            .copied()
            .find(|&o| Self::is_option_visible(doc, o))
    }

    pub fn selected(&self, doc: &Document) -> Option<ElementId> {
        self.options
            .iter()
            .copied()
            .find(|&o| doc.has_class(o, SELECTED_CLASS))
    }

    /// Nearest visible option before the selected one
    pub fn prev(&self, doc: &Document) -> Option<ElementId> {
        let index = self.selected_index(doc)?;
        self.options[..index]
            .iter()
            .rev()
            .copied()
            .find(|&o| Self::is_option_visible(doc, o))
    }

    /// Nearest visible option after the selected one
    pub fn next(&self, doc: &Document) -> Option<ElementId> {
        let index = self.selected_index(doc)?;
        self.options[index + 1..]
            .iter()
            .copied()
            .find(|&o| Self::is_option_visible(doc, o))
    }

    fn selected_index(&self, doc: &Document) -> Option<usize> {
        self.options
            .iter()
            .position(|&o| doc.has_class(o, SELECTED_CLASS))
    }

    pub fn selected_domain(&self, doc: &Document) -> Option<String> {
        self.selected(doc).map(|o| doc.text(o))
    }

    /// The list entry a click on `target` lands on, if any
    fn option_at(&self, doc: &Document, target: ElementId) -> Option<ElementId> {
        self.options
            .iter()
            .copied()
            .find(|&o| doc.contains(o, target))
    }

    pub fn option_views(&self, doc: &Document) -> Vec<DomainOption> {
        self.options
            .iter()
            .map(|&element| DomainOption {
                element,
                domain: doc.text(element),
                visible: Self::is_option_visible(doc, element),
                selected: doc.has_class(element, SELECTED_CLASS),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
