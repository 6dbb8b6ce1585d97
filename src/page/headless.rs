use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::{SectionRect, Viewport},
    page::{element::Element, host::PageHost},
};

/// Presentation state of one element on a [`HeadlessPage`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    /// Applied CSS classes.
    pub classes: BTreeSet<String>,
    /// Text content.
    pub text: String,
    /// `display` is not `none`.
    pub visible: bool,
    /// Explicit `opacity`, if set.
    pub opacity: Option<f64>,
    /// Other style properties.
    pub styles: BTreeMap<String, String>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            classes: BTreeSet::new(),
            text: String::new(),
            visible: true,
            opacity: None,
            styles: BTreeMap::new(),
        }
    }
}

/// Document-space placement of a section.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SectionLayout {
    /// Distance from the document top.
    pub offset_top: f64,
    /// Section height.
    pub height: f64,
}

/// In-memory page for running the player without a browser.
///
/// Bounding rects derive from each section's document offset and the current
/// scroll position.
#[derive(Clone, Debug)]
pub struct HeadlessPage {
    viewport: Viewport,
    scroll_y: f64,
    elements: BTreeMap<Element, ElementState>,
    layout: BTreeMap<Element, SectionLayout>,
}

impl HeadlessPage {
    /// Page containing every [`Element`], scrolled to the top, with no section layout.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            elements: Element::ALL
                .into_iter()
                .map(|e| (e, ElementState::default()))
                .collect(),
            layout: BTreeMap::new(),
        }
    }

    /// Conventional layout: a hero section `hero_screens` viewports tall, followed
    /// by a second section `second_screens` viewports tall.
    pub fn with_standard_layout(
        viewport: Viewport,
        hero_screens: f64,
        second_screens: f64,
    ) -> Self {
        let hero_h = viewport.height * hero_screens;
        Self::new(viewport)
            .with_section(Element::HeroSection, 0.0, hero_h)
            .with_section(
                Element::SecondSection,
                hero_h,
                viewport.height * second_screens,
            )
    }

    /// Place a section in document space.
    pub fn with_section(mut self, el: Element, offset_top: f64, height: f64) -> Self {
        self.layout
            .insert(el, SectionLayout { offset_top, height });
        self
    }

    /// Drop an element from the markup.
    pub fn without(mut self, el: Element) -> Self {
        self.elements.remove(&el);
        self.layout.remove(&el);
        self
    }

    /// Set the initial text of an element.
    pub fn with_text(mut self, el: Element, text: &str) -> Self {
        if let Some(state) = self.elements.get_mut(&el) {
            state.text = text.to_string();
        }
        self
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scroll to an absolute offset.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Scroll offset at which `el` reaches `progress` of its scroll travel.
    pub fn scroll_y_for(&self, el: Element, progress: f64) -> Option<f64> {
        let layout = self.layout.get(&el)?;
        let travel = (layout.height - self.viewport.height).max(0.0);
        Some(layout.offset_top + travel * progress)
    }

    /// Change the window size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// State of an element still in the document.
    pub fn element(&self, el: Element) -> Option<&ElementState> {
        self.elements.get(&el)
    }

    /// Whether `el` exists and carries `class`.
    pub fn has_class(&self, el: Element, class: &str) -> bool {
        self.element(el).is_some_and(|s| s.classes.contains(class))
    }

    /// Text content of `el`, if present.
    pub fn text(&self, el: Element) -> Option<&str> {
        self.element(el).map(|s| s.text.as_str())
    }

    /// Explicit opacity of `el`, if set.
    pub fn opacity(&self, el: Element) -> Option<f64> {
        self.element(el).and_then(|s| s.opacity)
    }

    /// Style property of `el`, if set.
    pub fn style(&self, el: Element, name: &str) -> Option<&str> {
        self.element(el)
            .and_then(|s| s.styles.get(name))
            .map(String::as_str)
    }

    /// Every element still in the document.
    pub fn elements(&self) -> &BTreeMap<Element, ElementState> {
        &self.elements
    }
}

impl PageHost for HeadlessPage {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn contains(&self, el: Element) -> bool {
        self.elements.contains_key(&el)
    }

    fn bounding_rect(&self, el: Element) -> Option<SectionRect> {
        if !self.contains(el) {
            return None;
        }
        let layout = self.layout.get(&el)?;
        Some(SectionRect {
            top: layout.offset_top - self.scroll_y,
            height: layout.height,
        })
    }

    fn set_visible(&mut self, el: Element, visible: bool) {
        if let Some(s) = self.elements.get_mut(&el) {
            s.visible = visible;
        }
    }

    fn add_class(&mut self, el: Element, class: &str) {
        if let Some(s) = self.elements.get_mut(&el) {
            s.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, el: Element, class: &str) {
        if let Some(s) = self.elements.get_mut(&el) {
            s.classes.remove(class);
        }
    }

    fn remove(&mut self, el: Element) {
        self.elements.remove(&el);
    }

    fn set_text(&mut self, el: Element, text: &str) {
        if let Some(s) = self.elements.get_mut(&el) {
            s.text = text.to_string();
        }
    }

    fn set_opacity(&mut self, el: Element, opacity: f64) {
        if let Some(s) = self.elements.get_mut(&el) {
            s.opacity = Some(opacity);
        }
    }

    fn set_style_property(&mut self, el: Element, name: &str, value: &str) {
        if let Some(s) = self.elements.get_mut(&el) {
            s.styles.insert(name.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/headless.rs"]
mod tests;
