//! DOM abstraction used by every handler.
//!
//! DESIGN
//! ======
//! Handlers receive element handles resolved once at registration instead
//! of looking elements up by id while an event is being handled. Keeping the
//! handle type behind [`DomElement`] lets the same handler code run against
//! `web_sys::HtmlElement` in the browser and an in-memory fake in tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// CSS `display` values the controller switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    /// The CSS keyword for this value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }
}

/// A page element the controller can read and mutate.
///
/// Implementations are cheap reference handles; cloning one never copies
/// the underlying node.
pub trait DomElement: Clone + 'static {
    /// Set the inline `display` style.
    fn set_display(&self, display: Display);

    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Remove every child node.
    fn clear_children(&self);

    /// Append an `<li>` child holding `text`.
    fn append_list_item(&self, text: &str);

    /// Rendered text, if the element exposes any.
    fn visible_text(&self) -> Option<String>;

    /// Nearest ancestor-or-self whose tag name is `tag`.
    fn closest(&self, tag: &str) -> Option<Self>;

    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self>;
}

/// Element lookup over the whole page.
pub trait PageLookup {
    type Element: DomElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element in document order matching `selector`.
    fn select(&self, selector: &str) -> Option<Self::Element>;
}

/// Whatever a click event reports as its target.
///
/// Usually a [`DomElement`] itself, but the target may also be an element
/// the handlers never write to, such as an SVG child of a mind-map node. It
/// only has to find its node ancestor.
pub trait ClickTarget<E> {
    /// Nearest ancestor-or-self whose tag name is `tag`.
    fn closest_node(&self, tag: &str) -> Option<E>;
}

impl<E: DomElement> ClickTarget<E> for E {
    fn closest_node(&self, tag: &str) -> Option<E> {
        self.closest(tag)
    }
}
