use crate::{
    foundation::core::{SectionRect, Viewport},
    page::element::Element,
};

/// Host page the player reads geometry from and writes presentation state to.
///
/// Writes to elements the page lacks are expected to be ignored.
pub trait PageHost {
    /// Window inner size.
    fn viewport(&self) -> Viewport;

    /// Whether the element exists in the markup.
    fn contains(&self, el: Element) -> bool;

    /// Bounding geometry relative to the viewport, if the element exists.
    fn bounding_rect(&self, el: Element) -> Option<SectionRect>;

    /// Show or hide the element (`display`).
    fn set_visible(&mut self, el: Element, visible: bool);

    /// Add a CSS class.
    fn add_class(&mut self, el: Element, class: &str);

    /// Remove a CSS class.
    fn remove_class(&mut self, el: Element, class: &str);

    /// Detach the element from the document.
    fn remove(&mut self, el: Element);

    /// Replace the text content.
    fn set_text(&mut self, el: Element, text: &str);

    /// Set the `opacity` style.
    fn set_opacity(&mut self, el: Element, opacity: f64);

    /// Set an arbitrary style property, including custom properties.
    fn set_style_property(&mut self, el: Element, name: &str, value: &str);
}

/// A deferred page write.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum PageAction {
    /// [`PageHost::add_class`].
    AddClass(Element, &'static str),
    /// [`PageHost::remove_class`].
    RemoveClass(Element, &'static str),
    /// [`PageHost::remove`].
    Remove(Element),
}

impl PageAction {
    /// Perform the write on `page`.
    pub fn apply<P: PageHost + ?Sized>(&self, page: &mut P) {
        match *self {
            PageAction::AddClass(el, class) => page.add_class(el, class),
            PageAction::RemoveClass(el, class) => page.remove_class(el, class),
            PageAction::Remove(el) => page.remove(el),
        }
    }
}
