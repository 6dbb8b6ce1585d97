use super::*;
use crate::{eval::progress::section_progress, page::host::PageAction};

#[test]
fn bounding_rect_tracks_scroll() {
    let mut page = HeadlessPage::with_standard_layout(Viewport::new(1000.0, 800.0), 6.0, 3.0);
    assert_eq!(
        page.bounding_rect(Element::HeroSection),
        Some(SectionRect {
            top: 0.0,
            height: 4800.0
        })
    );
    assert_eq!(page.scroll_y(), 0.0);
    page.scroll_to(1200.0);
    assert_eq!(page.scroll_y(), 1200.0);
    assert_eq!(
        page.bounding_rect(Element::SecondSection),
        Some(SectionRect {
            top: 3600.0,
            height: 2400.0
        })
    );
    assert_eq!(page.bounding_rect(Element::HeroTitle), None);
}

#[test]
fn scroll_y_for_inverts_section_progress() {
    let mut page = HeadlessPage::with_standard_layout(Viewport::new(1000.0, 800.0), 6.0, 3.0);
    for p in [0.0, 0.3, 0.75, 1.0] {
        let y = page.scroll_y_for(Element::SecondSection, p).unwrap();
        page.scroll_to(y);
        let rect = page.bounding_rect(Element::SecondSection).unwrap();
        assert!((section_progress(rect, 800.0) - p).abs() < 1e-9);
    }
}

#[test]
fn writes_to_removed_elements_are_ignored() {
    let mut page = HeadlessPage::new(Viewport::new(10.0, 10.0)).without(Element::CarImage);
    assert!(!page.contains(Element::CarImage));
    page.set_opacity(Element::CarImage, 0.5);
    assert_eq!(page.opacity(Element::CarImage), None);

    PageAction::AddClass(Element::Preloader, "fade-out").apply(&mut page);
    assert!(page.has_class(Element::Preloader, "fade-out"));
    let before = page.elements().len();
    PageAction::Remove(Element::Preloader).apply(&mut page);
    assert!(page.element(Element::Preloader).is_none());
    assert_eq!(page.elements().len(), before - 1);
    assert!(!page.elements().contains_key(&Element::CarImage));
    assert!(!page.has_class(Element::Preloader, "fade-out"));
}

#[test]
fn text_style_and_visibility_are_recorded() {
    let mut page =
        HeadlessPage::new(Viewport::new(10.0, 10.0)).with_text(Element::HeroTitle, "MG Cyberster");
    assert_eq!(page.text(Element::HeroTitle), Some("MG Cyberster"));
    page.set_style_property(Element::ScrollLine, "--progress", "50%");
    page.set_visible(Element::LoadingPlaceholder, false);
    page.remove_class(Element::Header, "missing");
    assert_eq!(page.style(Element::ScrollLine, "--progress"), Some("50%"));
    assert!(!page.element(Element::LoadingPlaceholder).unwrap().visible);
}
