//! Component Naming
//!
//! Pure functions mapping between component registry names and their DOM
//! tag representation, plus the classification of tree nodes into
//! component boundaries and slots.
//!
//! Two registry names are reserved: `document` denotes the root element of
//! the page and `head` its head section. They map to the plain `HTML` and
//! `HEAD` tags; every other component renders as a `CAT-`-prefixed custom
//! element. The prefix is matched case-insensitively on input and emitted
//! upper-cased.
//!
//! Every function here is total: no input panics, invalid or absent input
//! yields a neutral result.

/// Tag prefix marking an element as a component boundary.
pub const COMPONENT_PREFIX: &str = "cat-";
/// Reserved registry name of the root document component.
pub const DOCUMENT_COMPONENT_NAME: &str = "document";
/// Reserved registry name of the head component.
pub const HEAD_COMPONENT_NAME: &str = "head";
/// Element name the document component renders as.
pub const DOCUMENT_ELEMENT_NAME: &str = "html";
/// Tag name of the document element as reported by DOM serializers.
pub const DOCUMENT_TAG_NAME: &str = "HTML";
/// Tag name of the head element.
pub const HEAD_TAG_NAME: &str = "HEAD";
/// Tag name of a content-insertion slot.
pub const SLOT_TAG_NAME: &str = "SLOT";

/// The kind of a DOM tree node, numbered per the DOM specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element node.
    Element = 1,
    /// An attribute node.
    Attribute = 2,
    /// A text node.
    Text = 3,
    /// A comment node.
    Comment = 8,
}

/// Minimal view of a DOM tree node, implemented by the external parser.
pub trait DomNode {
    /// The node's kind.
    fn kind(&self) -> NodeKind;

    /// The node's tag name, upper-cased as DOM serializers report element
    /// names. Empty for non-element nodes.
    fn tag_name(&self) -> &str;
}

/// Determines if the name is the reserved `document` component name.
pub fn is_document_component(component_name: &str) -> bool {
    component_name.eq_ignore_ascii_case(DOCUMENT_COMPONENT_NAME)
}

/// Determines if the name is the reserved `head` component name.
pub fn is_head_component(component_name: &str) -> bool {
    component_name.eq_ignore_ascii_case(HEAD_COMPONENT_NAME)
}

fn has_component_prefix(tag_name: &str) -> bool {
    tag_name
        .get(..COMPONENT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(COMPONENT_PREFIX))
}

/// Determines if the node is a component boundary: an element whose tag
/// carries the component prefix, or the document/head element itself.
pub fn is_component_node(node: &dyn DomNode) -> bool {
    node.kind() == NodeKind::Element
        && (has_component_prefix(node.tag_name())
            || node.tag_name() == HEAD_TAG_NAME
            || node.tag_name() == DOCUMENT_TAG_NAME)
}

/// Determines if the node is a content-insertion slot.
pub fn is_slot_node(node: &dyn DomNode) -> bool {
    node.kind() == NodeKind::Element && node.tag_name() == SLOT_TAG_NAME
}

/// Gets the registry name back from a full tag name.
///
/// `HEAD` maps to `head`, `DOCUMENT` and `HTML` map to `document`, any
/// other tag has the component prefix stripped. Empty input yields an
/// empty string.
pub fn get_original_component_name(full_component_name: &str) -> String {
    let lower = full_component_name.to_ascii_lowercase();
    if lower == HEAD_COMPONENT_NAME {
        return lower;
    }
    if lower == DOCUMENT_COMPONENT_NAME || lower == DOCUMENT_ELEMENT_NAME {
        return DOCUMENT_COMPONENT_NAME.to_string();
    }
    if has_component_prefix(&lower) {
        lower[COMPONENT_PREFIX.len()..].to_string()
    } else {
        lower
    }
}

/// Gets the tag name a component renders as.
///
/// `head` maps to `HEAD`, `document` maps to `HTML`, any other name is
/// upper-cased and prefixed. Empty input yields an empty string.
pub fn get_tag_name_for_component_name(component_name: &str) -> String {
    if component_name.is_empty() {
        return String::new();
    }
    let upper = component_name.to_ascii_uppercase();
    if component_name == HEAD_COMPONENT_NAME {
        return upper;
    }
    if component_name == DOCUMENT_COMPONENT_NAME {
        return DOCUMENT_ELEMENT_NAME.to_ascii_uppercase();
    }
    let mut tag_name = COMPONENT_PREFIX.to_ascii_uppercase();
    tag_name.push_str(&upper);
    tag_name
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        kind: NodeKind,
        tag_name: &'static str,
    }

    impl DomNode for TestNode {
        fn kind(&self) -> NodeKind {
            self.kind
        }

        fn tag_name(&self) -> &str {
            self.tag_name
        }
    }

    fn element(tag_name: &'static str) -> TestNode {
        TestNode {
            kind: NodeKind::Element,
            tag_name,
        }
    }

    #[test]
    fn reserved_name_checks_are_case_insensitive() {
        assert!(is_document_component("document"));
        assert!(is_document_component("Document"));
        assert!(!is_document_component("documents"));

        assert!(is_head_component("head"));
        assert!(is_head_component("HEAD"));
        assert!(!is_head_component("header"));
    }

    #[test]
    fn prefixed_elements_are_component_nodes() {
        assert!(is_component_node(&element("CAT-NEWS")));
        assert!(is_component_node(&element("cat-news")));
        assert!(is_component_node(&element("HTML")));
        assert!(is_component_node(&element("HEAD")));

        assert!(!is_component_node(&element("DIV")));
        assert!(!is_component_node(&element("CATALOG")));
        assert!(!is_component_node(&TestNode {
            kind: NodeKind::Text,
            tag_name: "CAT-NEWS",
        }));
    }

    #[test]
    fn slot_nodes_are_slot_elements_only() {
        assert!(is_slot_node(&element("SLOT")));
        assert!(!is_slot_node(&element("DIV")));
        assert!(!is_slot_node(&TestNode {
            kind: NodeKind::Comment,
            tag_name: "SLOT",
        }));
    }

    #[test]
    fn original_name_strips_prefix() {
        assert_eq!(get_original_component_name("CAT-NEWS"), "news");
        assert_eq!(get_original_component_name("cat-news"), "news");
        assert_eq!(get_original_component_name("NEWS"), "news");
        assert_eq!(get_original_component_name(""), "");
    }

    #[test]
    fn original_name_maps_reserved_tags() {
        assert_eq!(get_original_component_name("HEAD"), "head");
        assert_eq!(get_original_component_name("HTML"), "document");
        assert_eq!(get_original_component_name("DOCUMENT"), "document");
    }

    #[test]
    fn tag_name_prefixes_and_upper_cases() {
        assert_eq!(get_tag_name_for_component_name("news"), "CAT-NEWS");
        assert_eq!(get_tag_name_for_component_name("head"), "HEAD");
        assert_eq!(get_tag_name_for_component_name("document"), "HTML");
        assert_eq!(get_tag_name_for_component_name(""), "");
    }

    #[test]
    fn name_mapping_round_trips() {
        for name in ["news", "user-panel", "cart", "document", "head"] {
            let tag_name = get_tag_name_for_component_name(name);
            assert_eq!(get_original_component_name(&tag_name), name);
        }
    }
}
