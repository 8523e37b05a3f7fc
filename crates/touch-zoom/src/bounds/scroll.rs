//! Nearest scrollable ancestor lookup

/// Computed `overflow-y` value of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
    Overlay,
}

impl Overflow {
    /// Parse a computed style value; unknown values are `Visible`
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "hidden" => Overflow::Hidden,
            "clip" => Overflow::Clip,
            "auto" => Overflow::Auto,
            "scroll" => Overflow::Scroll,
            "overlay" => Overflow::Overlay,
            _ => Overflow::Visible,
        }
    }

    /// Whether this overflow mode lets the user scroll
    #[inline]
    pub fn allows_scroll(self) -> bool {
        matches!(self, Overflow::Auto | Overflow::Scroll | Overflow::Overlay)
    }
}

/// The subset of an element the ancestor walk needs
pub trait ScrollNode: Sized {
    fn parent(&self) -> Option<Self>;
    /// True for the document `<body>`, where the walk stops
    fn is_document_body(&self) -> bool;
    fn overflow_y(&self) -> Overflow;
    fn scroll_height(&self) -> f64;
    fn client_height(&self) -> f64;
}

/// Where scroll events that move the viewport come from
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollAnchor<N> {
    Element(N),
    Document,
}

/// Walk up from `node`'s parent to the first ancestor that scrolls
/// vertically and has content taller than itself. Falls back to the
/// document.
pub fn nearest_scroll_container<N: ScrollNode>(node: &N) -> ScrollAnchor<N> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_document_body() {
            return ScrollAnchor::Document;
        }
        let has_scrollable_content = parent.scroll_height() > parent.client_height();
        if has_scrollable_content && parent.overflow_y().allows_scroll() {
            return ScrollAnchor::Element(parent);
        }
        current = parent.parent();
    }
    ScrollAnchor::Document
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeNode {
        name: &'static str,
        body: bool,
        overflow: Overflow,
        scroll_height: f64,
        client_height: f64,
        parent: Option<Rc<FakeNode>>,
    }

    impl FakeNode {
        fn new(name: &'static str, overflow: Overflow, scroll: f64, client: f64) -> Self {
            Self {
                name,
                body: false,
                overflow,
                scroll_height: scroll,
                client_height: client,
                parent: None,
            }
        }

        fn child_of(mut self, parent: FakeNode) -> Self {
            self.parent = Some(Rc::new(parent));
            self
        }
    }

    impl ScrollNode for FakeNode {
        fn parent(&self) -> Option<Self> {
            self.parent.as_deref().cloned()
        }
        fn is_document_body(&self) -> bool {
            self.body
        }
        fn overflow_y(&self) -> Overflow {
            self.overflow
        }
        fn scroll_height(&self) -> f64 {
            self.scroll_height
        }
        fn client_height(&self) -> f64 {
            self.client_height
        }
    }

    fn body() -> FakeNode {
        FakeNode {
            body: true,
            ..FakeNode::new("body", Overflow::Auto, 5000.0, 800.0)
        }
    }

    #[test]
    fn test_overflow_parsing() {
        assert_eq!(Overflow::from_css("auto"), Overflow::Auto);
        assert_eq!(Overflow::from_css(" scroll "), Overflow::Scroll);
        assert_eq!(Overflow::from_css("overlay"), Overflow::Overlay);
        assert_eq!(Overflow::from_css("hidden"), Overflow::Hidden);
        assert_eq!(Overflow::from_css("inherit"), Overflow::Visible);
        assert!(!Overflow::Hidden.allows_scroll());
        assert!(Overflow::Overlay.allows_scroll());
    }

    #[test]
    fn test_finds_scrolling_ancestor() {
        let scroller = FakeNode::new("scroller", Overflow::Auto, 2000.0, 600.0).child_of(body());
        let wrapper = FakeNode::new("wrapper", Overflow::Visible, 2000.0, 600.0).child_of(scroller);
        let viewport = FakeNode::new("viewport", Overflow::Scroll, 900.0, 100.0).child_of(wrapper);

        match nearest_scroll_container(&viewport) {
            ScrollAnchor::Element(node) => assert_eq!(node.name, "scroller"),
            other => panic!("expected scroller, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow_without_content_is_skipped() {
        let roomy = FakeNode::new("roomy", Overflow::Auto, 600.0, 600.0).child_of(body());
        let viewport = FakeNode::new("viewport", Overflow::Visible, 0.0, 0.0).child_of(roomy);
        assert_eq!(nearest_scroll_container(&viewport), ScrollAnchor::Document);
    }

    #[test]
    fn test_stops_at_body() {
        let viewport = FakeNode::new("viewport", Overflow::Visible, 0.0, 0.0).child_of(body());
        assert_eq!(nearest_scroll_container(&viewport), ScrollAnchor::Document);
    }

    #[test]
    fn test_detached_node_uses_document() {
        let orphan = FakeNode::new("orphan", Overflow::Auto, 100.0, 10.0);
        assert_eq!(nearest_scroll_container(&orphan), ScrollAnchor::Document);
    }
}
