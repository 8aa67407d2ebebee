use std::collections::BTreeMap;

const DATA_PREFIX: &str = "data-";

/// Identity of an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }
}

/// Element arena with a single `body` root
///
/// Ids are never reused, so an `ElementId` stays valid for the lifetime of
/// the document. Unknown ids read as empty and ignore writes.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    focused: Option<ElementId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            focused: None,
        }
    }

    pub fn body(&self) -> ElementId {
        ElementId(0)
    }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.push(Element::new(tag));
        ElementId(self.elements.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    pub fn tag(&self, id: ElementId) -> &str {
        self.get(id).map(|el| el.tag.as_str()).unwrap_or("")
    }

    // Tree structure

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|el| el.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// True when `node` is `ancestor` or sits somewhere below it
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.get(parent).is_none() || self.get(child).is_none() || self.contains(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(el) = self.get_mut(parent) {
            el.children.push(child);
        }
        if let Some(el) = self.get_mut(child) {
            el.parent = Some(parent);
        }
    }

    /// Place `node` directly after `reference` under the same parent
    ///
    /// A parentless `reference` leaves `node` detached.
    pub fn insert_after(&mut self, reference: ElementId, node: ElementId) {
        if reference == node || self.get(node).is_none() || self.contains(node, reference) {
            return;
        }
        self.detach(node);
        let Some(parent) = self.parent(reference) else {
            return;
        };
        if let Some(el) = self.get_mut(parent) {
            let index = el
                .children
                .iter()
                .position(|&c| c == reference)
                .map_or(el.children.len(), |i| i + 1);
            el.children.insert(index, node);
        }
        if let Some(el) = self.get_mut(node) {
            el.parent = Some(parent);
        }
    }

    /// Put `wrapper` where `target` was and move `target` inside it
    pub fn wrap(&mut self, target: ElementId, wrapper: ElementId) {
        if target == wrapper || self.get(target).is_none() || self.get(wrapper).is_none() {
            return;
        }
        self.detach(wrapper);
        if let Some(parent) = self.parent(target) {
            if let Some(el) = self.get_mut(parent) {
                if let Some(slot) = el.children.iter_mut().find(|c| **c == target) {
                    *slot = wrapper;
                }
            }
            if let Some(el) = self.get_mut(wrapper) {
                el.parent = Some(parent);
            }
        }
        if let Some(el) = self.get_mut(target) {
            el.parent = Some(wrapper);
        }
        if let Some(el) = self.get_mut(wrapper) {
            el.children.push(target);
        }
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(el) = self.get_mut(parent) {
            el.children.retain(|&c| c != id);
        }
        if let Some(el) = self.get_mut(id) {
            el.parent = None;
        }
    }

    // Content

    /// Text content of the element and all of its descendants, in tree order
    pub fn text(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        if let Some(el) = self.get(id) {
            out.push_str(&el.text);
            for &child in &el.children {
                self.collect_text(child, out);
            }
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.get_mut(id) {
            el.text = text.to_string();
        }
    }

    /// Current value of a form control
    pub fn value(&self, id: ElementId) -> &str {
        self.get(id).map(|el| el.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, id: ElementId, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.value = value.to_string();
        }
    }

    // Attributes

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    /// `data-*` attributes keyed without their prefix
    pub fn data(&self, id: ElementId) -> BTreeMap<String, String> {
        self.get(id)
            .map(|el| {
                el.attributes
                    .iter()
                    .filter_map(|(name, value)| {
                        name.strip_prefix(DATA_PREFIX)
                            .filter(|key| !key.is_empty())
                            .map(|key| (key.to_string(), value.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    // Classes

    pub fn classes(&self, id: ElementId) -> &[String] {
        self.get(id).map(|el| el.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if class.is_empty() || self.has_class(id, class) {
            return;
        }
        if let Some(el) = self.get_mut(id) {
            el.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Add `class` when `on` is true, remove it otherwise
    pub fn toggle_class(&mut self, id: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    // Focus

    pub fn focus(&mut self, id: ElementId) {
        if self.get(id).is_some() {
            self.focused = Some(id);
        }
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
