//! Tests for the in-memory Document

use super::*;

fn doc_with_input() -> (Document, ElementId) {
    let mut doc = Document::new();
    let input = doc.create_element("input");
    let body = doc.body();
    doc.append_child(body, input);
    (doc, input)
}

mod tree_tests {
    use super::*;

    #[test]
    fn test_new_document_has_body_root() {
        let doc = Document::new();
        assert_eq!(doc.tag(doc.body()), "body");
        assert_eq!(doc.len(), 1);
        assert!(doc.parent(doc.body()).is_none());
    }

    #[test]
    fn test_append_child_sets_parent() {
        let (doc, input) = doc_with_input();
        assert_eq!(doc.parent(input), Some(doc.body()));
        assert_eq!(doc.children(doc.body()), &[input]);
    }

    #[test]
    fn test_append_child_moves_between_parents() {
        let (mut doc, input) = doc_with_input();
        let form = doc.create_element("form");
        doc.append_child(doc.body(), form);
        doc.append_child(form, input);

        assert_eq!(doc.children(doc.body()), &[form]);
        assert_eq!(doc.children(form), &[input]);
    }

    #[test]
    fn test_append_child_rejects_cycles() {
        let (mut doc, input) = doc_with_input();
        let body = doc.body();
        doc.append_child(input, body);
        assert!(doc.parent(body).is_none());
        assert!(doc.children(input).is_empty());
    }

    #[test]
    fn test_wrap_replaces_target_in_parent() {
        let (mut doc, input) = doc_with_input();
        let before = doc.create_element("label");
        doc.append_child(doc.body(), before);
        let body = doc.body();
        // move input after label so its slot index is meaningful
        doc.append_child(body, input);

        let wrapper = doc.create_element("div");
        doc.wrap(input, wrapper);

        assert_eq!(doc.children(body), &[before, wrapper]);
        assert_eq!(doc.parent(wrapper), Some(body));
        assert_eq!(doc.children(wrapper), &[input]);
        assert_eq!(doc.parent(input), Some(wrapper));
    }

    #[test]
    fn test_wrap_detached_target() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        let wrapper = doc.create_element("div");
        doc.wrap(input, wrapper);

        assert!(doc.parent(wrapper).is_none());
        assert_eq!(doc.parent(input), Some(wrapper));
    }

    #[test]
    fn test_insert_after_places_sibling() {
        let (mut doc, input) = doc_with_input();
        let trailing = doc.create_element("span");
        doc.append_child(doc.body(), trailing);

        let list = doc.create_element("ul");
        doc.insert_after(input, list);

        assert_eq!(doc.children(doc.body()), &[input, list, trailing]);
        assert_eq!(doc.parent(list), Some(doc.body()));
    }

    #[test]
    fn test_insert_after_parentless_reference_leaves_node_detached() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        let list = doc.create_element("ul");
        doc.insert_after(input, list);
        assert!(doc.parent(list).is_none());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let (mut doc, input) = doc_with_input();
        let wrapper = doc.create_element("div");
        doc.wrap(input, wrapper);

        assert!(doc.contains(input, input));
        assert!(doc.contains(wrapper, input));
        assert!(doc.contains(doc.body(), input));
        assert!(!doc.contains(input, wrapper));
    }
}

mod content_tests {
    use super::*;

    #[test]
    fn test_text_includes_descendants() {
        let mut doc = Document::new();
        let list = doc.create_element("ul");
        let a = doc.create_element("li");
        let b = doc.create_element("li");
        doc.set_text(a, "gmail.com");
        doc.set_text(b, "yahoo.com");
        doc.append_child(list, a);
        doc.append_child(list, b);

        assert_eq!(doc.text(a), "gmail.com");
        assert_eq!(doc.text(list), "gmail.comyahoo.com");
    }

    #[test]
    fn test_value_roundtrip() {
        let (mut doc, input) = doc_with_input();
        assert_eq!(doc.value(input), "");
        doc.set_value(input, "jo@");
        assert_eq!(doc.value(input), "jo@");
    }

    #[test]
    fn test_data_strips_prefix() {
        let (mut doc, input) = doc_with_input();
        doc.set_attribute(input, "data-domains", "a.com,b.com");
        doc.set_attribute(input, "data-", "ignored");
        doc.set_attribute(input, "autocomplete", "off");

        let data = doc.data(input);
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("domains").map(String::as_str), Some("a.com,b.com"));
    }

    #[test]
    fn test_unknown_id_is_tolerated() {
        let mut doc = Document::new();
        let mut big = Document::new();
        for _ in 0..5 {
            big.create_element("li");
        }
        let stranger = big.create_element("li");

        doc.set_value(stranger, "x");
        doc.add_class(stranger, "hide");
        doc.focus(stranger);

        assert_eq!(doc.value(stranger), "");
        assert!(!doc.has_class(stranger, "hide"));
        assert!(doc.focused().is_none());
        assert_eq!(doc.text(stranger), "");
        assert_eq!(doc.tag(stranger), "");
    }
}

mod class_tests {
    use super::*;

    #[test]
    fn test_add_class_is_idempotent() {
        let (mut doc, input) = doc_with_input();
        doc.add_class(input, "hide");
        doc.add_class(input, "hide");
        assert_eq!(doc.classes(input), &["hide".to_string()]);
    }

    #[test]
    fn test_toggle_class() {
        let (mut doc, input) = doc_with_input();
        doc.toggle_class(input, "selected", true);
        assert!(doc.has_class(input, "selected"));
        doc.toggle_class(input, "selected", false);
        assert!(!doc.has_class(input, "selected"));
    }

    #[test]
    fn test_remove_missing_class_is_noop() {
        let (mut doc, input) = doc_with_input();
        doc.remove_class(input, "hide");
        assert!(doc.classes(input).is_empty());
    }
}

#[test]
fn test_focus_tracks_last_element() {
    let (mut doc, input) = doc_with_input();
    assert!(doc.focused().is_none());
    doc.focus(input);
    assert_eq!(doc.focused(), Some(input));
}
