//! Page-level scenarios
//!
//! Drive a [`PageShell`] against a simulated viewport and assert on the
//! state it tracks and the tree it renders.

use std::rc::Rc;

use folio_core::event_types;
use folio_layout::{Element, Length, Node};

use crate::prelude::*;

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 800.0;

fn mounted_page(scheme: ColorScheme) -> (PageShell, Rc<MemoryPreference>, SharedViewport) {
    let preference = Rc::new(MemoryPreference::new(scheme));
    let mut page = PageShell::new(SiteConfig::default(), preference.clone()).with_year(2030);
    let viewport = Viewport::shared(WIDTH, HEIGHT);
    page.mount(&viewport);
    (page, preference, viewport)
}

fn by_class<'a>(root: &'a Element, class: &str) -> &'a Element {
    root.find_all_by_class(class)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no element with class {class}"))
}

#[test]
fn test_mount_registers_and_unmount_releases_listeners() {
    let (mut page, _, viewport) = mounted_page(ColorScheme::Light);
    assert!(page.is_mounted());
    assert_eq!(viewport.listener_count(event_types::SCROLL), 1);
    assert_eq!(viewport.listener_count(event_types::RESIZE), 2);

    page.unmount();
    assert!(!page.is_mounted());
    assert_eq!(viewport.listener_count(event_types::SCROLL), 0);
    assert_eq!(viewport.listener_count(event_types::RESIZE), 0);

    page.mount(&viewport);
    page.mount(&viewport);
    assert_eq!(viewport.listener_count(event_types::SCROLL), 1);
    assert_eq!(viewport.listener_count(event_types::RESIZE), 2);
}

#[test]
fn test_drop_releases_listeners() {
    let viewport = Viewport::shared(WIDTH, HEIGHT);
    {
        let preference = Rc::new(MemoryPreference::default());
        let mut page = PageShell::new(SiteConfig::default(), preference);
        page.mount(&viewport);
        assert_eq!(viewport.listener_count(event_types::SCROLL), 1);
    }
    assert_eq!(viewport.listener_count(event_types::SCROLL), 0);
    assert_eq!(viewport.listener_count(event_types::RESIZE), 0);
}

#[test]
fn test_document_height_matches_layout() {
    let (page, _, viewport) = mounted_page(ColorScheme::Light);
    let layout = page.layout();
    assert_eq!(viewport.document_height(), layout.document_height);
    assert_eq!(layout.hero.height(), HEIGHT);
    assert_eq!(layout.about.y(), HEIGHT);
}

#[test]
fn test_scroll_position_is_tracked() {
    let (page, _, viewport) = mounted_page(ColorScheme::Light);
    assert_eq!(page.scroll_y(), 0.0);

    viewport.scroll_to(350.0);
    assert_eq!(page.scroll_y(), 350.0);

    let max = viewport.max_scroll();
    viewport.scroll_to(max + 500.0);
    assert_eq!(page.scroll_y(), max);
}

#[test]
fn test_theme_toggle_persists_and_swaps_icon() {
    let (mut page, preference, _viewport) = mounted_page(ColorScheme::Light);
    page.take_rebuild();

    let tree = page.render();
    assert!(tree.find_by_id("theme-toggle").is_some());
    assert!(!tree.find_all_by_class("icon-moon").is_empty());
    assert!(tree.has_class("light"));

    assert_eq!(page.toggle_theme().unwrap(), ColorScheme::Dark);
    assert_eq!(page.theme(), ColorScheme::Dark);
    assert_eq!(preference.get_theme(), ColorScheme::Dark);
    assert_eq!(preference.writes(), 1);
    assert!(page.take_rebuild());

    let tree = page.render();
    assert!(!tree.find_all_by_class("icon-sun").is_empty());
    assert!(tree.find_all_by_class("icon-moon").is_empty());
    assert!(tree.has_class("dark"));

    page.toggle_theme().unwrap();
    assert_eq!(page.theme(), ColorScheme::Light);
}

#[test]
fn test_theme_log_fires_only_on_change() {
    let (mut page, _, viewport) = mounted_page(ColorScheme::Dark);
    assert_eq!(page.theme_changes(), 0);

    page.toggle_theme().unwrap();
    assert_eq!(page.theme_changes(), 1);
    viewport.scroll_to(300.0);
    page.tick(0.5);
    assert_eq!(page.theme_changes(), 1);

    page.toggle_theme().unwrap();
    assert_eq!(page.theme_changes(), 2);

    page.unmount();
    page.toggle_theme().unwrap();
    page.mount(&viewport);
    assert_eq!(page.theme(), ColorScheme::Light);
    assert_eq!(page.theme_changes(), 2);
}

#[test]
fn test_initial_theme_comes_from_preference() {
    let (page, _, _viewport) = mounted_page(ColorScheme::Dark);
    assert_eq!(page.theme(), ColorScheme::Dark);
}

#[test]
fn test_toggle_button_hidden_until_mounted() {
    let preference = Rc::new(MemoryPreference::default());
    let page = PageShell::new(SiteConfig::default(), preference);
    let tree = page.render();
    assert!(tree.find_by_id("theme-toggle").is_none());
    assert!(page.blobs().is_empty());
}

#[test]
fn test_hero_and_links_entrances() {
    let (mut page, _, _viewport) = mounted_page(ColorScheme::Light);

    let tree = page.render();
    assert_eq!(by_class(&tree, "hero-heading").style.opacity, Some(0.0));
    assert_eq!(tree.find_by_id("links").unwrap().style.opacity, Some(0.0));

    page.tick(1.0);
    let tree = page.render();
    let heading = by_class(&tree, "hero-heading");
    assert_eq!(heading.style.opacity, Some(1.0));
    assert_eq!(heading.style.translate_y, Some(Length::Px(0.0)));
    // The links row waits a full second before fading.
    assert_eq!(tree.find_by_id("links").unwrap().style.opacity, Some(0.0));

    page.tick(1.0);
    let tree = page.render();
    assert_eq!(tree.find_by_id("links").unwrap().style.opacity, Some(1.0));
}

#[test]
fn test_hero_reveals_start_on_mount() {
    let (page, _, _viewport) = mounted_page(ColorScheme::Light);
    assert!(page.greeting().is_triggered());
    assert!(page.tagline().is_triggered());
    assert!(!page.skills_title().is_triggered());

    let greeting = page.greeting();
    assert_eq!(greeting.len(), "Hello, I'm Alex".chars().count());
    assert!((page.tagline().delay_for(0) - 0.5).abs() < 1e-6);
}

#[test]
fn test_skills_reveal_when_scrolled_into_view() {
    let (mut page, _, viewport) = mounted_page(ColorScheme::Light);
    page.tick(0.5);
    assert!(page.badges().iter().all(|b| !b.is_triggered()));

    viewport.scroll_to(1000.0);
    page.tick(0.1);
    assert!(page.skills_title().is_triggered());
    assert!(page.badges().iter().all(|b| b.is_triggered()));

    // Badge i waits i * 0.1s.
    let tree = page.render();
    let slots = tree.find_all_by_class("badge-slot");
    assert_eq!(slots.len(), page.config().skills.len());
    page.tick(0.15);
    let tree = page.render();
    let slots = tree.find_all_by_class("badge-slot");
    assert!(slots[0].style.opacity.unwrap() > 0.0);
    assert_eq!(slots[6].style.opacity, Some(0.0));
}

#[test]
fn test_reveals_do_not_replay() {
    let (mut page, _, viewport) = mounted_page(ColorScheme::Light);
    viewport.scroll_to(1000.0);
    page.tick(0.1);
    let first = page.skills_title().triggered_at();

    for y in [0.0, 1000.0, 0.0, 1200.0] {
        viewport.scroll_to(y);
        page.tick(0.1);
    }
    assert_eq!(page.skills_title().triggered_at(), first);
    assert_eq!(page.greeting().triggered_at(), Some(0.0));
}

#[test]
fn test_about_parallax_follows_scroll() {
    let (page, _, viewport) = mounted_page(ColorScheme::Light);
    // About starts at 800 with an 800 tall viewport: input range 0..1600.
    assert_eq!(page.about().element_top(), HEIGHT);
    assert_eq!(page.about().translate_y_percent(), 0.0);

    viewport.scroll_to(800.0);
    assert!((page.about().translate_y_percent() - 15.0).abs() < 1e-3);

    let tree = page.render();
    let content = by_class(&tree, "parallax-content");
    match content.style.translate_y {
        Some(Length::Percent(p)) => assert!((p - 15.0).abs() < 1e-3),
        other => panic!("unexpected transform {other:?}"),
    }
}

#[test]
fn test_resize_remeasures_about_and_document() {
    let (page, _, viewport) = mounted_page(ColorScheme::Light);
    viewport.resize(WIDTH, 1000.0);

    assert_eq!(page.about().element_top(), 1000.0);
    assert_eq!(page.about().client_height(), 1000.0);
    assert_eq!(viewport.document_height(), page.layout().document_height);
    assert_eq!(page.layout().about.y(), 1000.0);
}

#[test]
fn test_blobs_drift_with_scroll_and_stay_stable() {
    let (page, _, viewport) = mounted_page(ColorScheme::Light);
    assert_eq!(page.blobs().len(), 10);

    viewport.scroll_to(500.0);
    let tree = page.render();
    let blobs = tree.find_all_by_class("blob");
    assert_eq!(blobs.len(), 10);
    for (el, blob) in blobs.iter().zip(page.blobs().blobs()) {
        assert_eq!(el.style.translate_y, Some(Length::Px(blob.offset(500.0))));
    }

    assert_eq!(page.render(), tree);
}

#[test]
fn test_footer_year_and_json_snapshot() {
    let (page, _, _viewport) = mounted_page(ColorScheme::Light);
    let tree = page.render();
    let footer = tree.find_by_id("footer").unwrap();
    assert_eq!(footer.text_content(), "\u{00A9} 2030 All rights reserved :)");

    let json = to_json(&Node::from(tree)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["element"]["tag"], "main");
}

#[test]
fn test_html_snapshot_contains_letters() {
    let (mut page, _, _viewport) = mounted_page(ColorScheme::Light);
    page.tick(5.0);
    let html = HtmlRenderer::new().render_element(&page.render());

    assert!(html.contains("aria-label=\"Hello, I'm Alex\""));
    assert!(html.contains(">\u{00A0}</span>"));
    assert!(html.contains("href=\"https://github.com/alexdoe\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn test_file_preference_round_trip() {
    let path = std::env::temp_dir()
        .join(format!("folio-app-{}", std::process::id()))
        .join("theme.toml");
    let _ = std::fs::remove_file(&path);

    {
        let preference = Rc::new(FilePreference::open(&path, ColorScheme::Light).unwrap());
        let mut page = PageShell::new(SiteConfig::default(), preference);
        page.toggle_theme().unwrap();
    }

    let reopened = FilePreference::open(&path, ColorScheme::Light).unwrap();
    let page = PageShell::new(SiteConfig::default(), Rc::new(reopened));
    assert_eq!(page.theme(), ColorScheme::Dark);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
