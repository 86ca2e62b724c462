//! End-to-end view-state tests: the page behaviors exercised through
//! `PageState` against a real rendered document.

use std::time::Duration;

use folio::content::Catalog;
use folio::page::{PageState, SectionId};
use folio::tui::Document;

const WIDTH: usize = 100;
const VIEWPORT: usize = 40;

fn mounted() -> (PageState, Document) {
    let catalog = Catalog::builtin();
    let page = PageState::mount(catalog.profile.subtitles.iter().copied());
    let doc = Document::build(catalog, WIDTH, VIEWPORT, None);
    (page, doc)
}

fn settle(page: &mut PageState, doc: &Document) {
    for _ in 0..500 {
        page.on_tick(Duration::ZERO, &doc.layout, VIEWPORT);
        if !page.scroll.is_animating() {
            return;
        }
    }
    panic!("scroll never settled");
}

#[test]
fn subtitle_rotates_through_all_values_in_order() {
    let (mut page, doc) = mounted();
    let subtitles = Catalog::builtin().profile.subtitles;

    assert_eq!(page.rotator.label(), Some(subtitles[0]));

    for k in 1..=subtitles.len() {
        // Just past the k-th fade window.
        page.on_tick(
            Duration::from_millis(k as u64 * 3000 + 600),
            &doc.layout,
            VIEWPORT,
        );
        assert_eq!(page.rotator.label(), Some(subtitles[k % subtitles.len()]));
    }
}

#[test]
fn subtitle_hidden_mid_fade() {
    let (mut page, doc) = mounted();
    page.on_tick(Duration::from_millis(3200), &doc.layout, VIEWPORT);
    assert_eq!(page.rotator.label(), None);
    page.on_tick(Duration::from_millis(3600), &doc.layout, VIEWPORT);
    assert!(page.rotator.label().is_some());
}

#[test]
fn nav_highlight_follows_scroll_position() {
    let (mut page, doc) = mounted();
    assert_eq!(page.active_section(), None);

    for section in doc.layout.extents() {
        // Put the section in the middle of the viewport.
        let target = (section.top + section.height / 2).saturating_sub(VIEWPORT / 2);
        let max = doc.layout.max_scroll(VIEWPORT);
        page.scroll.jump_to(target.min(max));
        page.on_scroll(&doc.layout, VIEWPORT);

        // The last section cannot always be centered; accept the
        // document-order winner the spy reports.
        if section.id != SectionId::Skills {
            assert_eq!(
                page.active_section(),
                Some(section.id),
                "at offset {}",
                target
            );
        }
    }

    // At the very bottom the final section wins.
    page.scroll.jump_to(doc.layout.max_scroll(VIEWPORT));
    page.on_scroll(&doc.layout, VIEWPORT);
    assert_eq!(page.active_section(), Some(SectionId::Skills));
}

#[test]
fn header_and_hint_flags_track_offset_thresholds() {
    let (mut page, doc) = mounted();

    let mut header = Vec::new();
    let mut hint = Vec::new();
    for offset in [0, 5, 15, 9, 150, 50] {
        page.scroll.jump_to(offset);
        page.on_scroll(&doc.layout, VIEWPORT);
        header.push(page.chrome.header_solid);
        hint.push(page.chrome.scroll_hint_visible);
    }
    assert_eq!(header, [false, false, true, false, true, true]);
    assert_eq!(hint, [true, true, true, true, false, true]);
}

#[test]
fn back_to_top_appears_past_300_and_returns_home() {
    let (mut page, doc) = mounted();

    page.scroll.jump_to(300);
    page.on_scroll(&doc.layout, VIEWPORT);
    assert!(!page.back_to_top.visible);

    page.scroll.jump_to(301);
    page.on_scroll(&doc.layout, VIEWPORT);
    assert!(page.back_to_top.visible);

    page.back_to_top();
    settle(&mut page, &doc);
    assert_eq!(page.offset(), 0);
    assert!(!page.back_to_top.visible);
    assert!(page.chrome.scroll_hint_visible);
}

#[test]
fn navigation_compensates_for_fixed_header() {
    let (mut page, doc) = mounted();

    page.navigate_to(&doc.layout, VIEWPORT, SectionId::About);
    settle(&mut page, &doc);

    let about_top = doc
        .layout
        .extent(SectionId::About)
        .map(|e| e.top)
        .unwrap_or_default();
    assert_eq!(page.offset(), about_top.saturating_sub(60));
}

#[test]
fn overlapping_navigations_land_on_the_last_target() {
    let (mut page, doc) = mounted();

    page.navigate_to(&doc.layout, VIEWPORT, SectionId::Skills);
    page.on_tick(Duration::ZERO, &doc.layout, VIEWPORT);
    page.navigate_to(&doc.layout, VIEWPORT, SectionId::About);
    settle(&mut page, &doc);

    let about_top = doc
        .layout
        .extent(SectionId::About)
        .map(|e| e.top)
        .unwrap_or_default();
    assert_eq!(page.offset(), about_top.saturating_sub(60));
}

#[test]
fn spy_overwrites_optimistic_highlight() {
    let (mut page, doc) = mounted();

    // Activate a nav entry, then scroll somewhere else before the
    // animation runs: the spy's report wins, no suppression window.
    page.navigate_to(&doc.layout, VIEWPORT, SectionId::Skills);
    assert_eq!(page.active_section(), Some(SectionId::Skills));

    let about = doc.layout.extent(SectionId::About).map(|e| e.top).unwrap_or_default();
    page.scroll.jump_to(about);
    page.on_scroll(&doc.layout, VIEWPORT);
    assert_eq!(page.active_section(), Some(SectionId::About));
}

#[test]
fn teardown_is_idempotent_and_stops_updates() {
    let (mut page, doc) = mounted();

    page.teardown();
    page.teardown();
    assert!(page.is_torn_down());

    let before = page.active_section();
    page.scroll.jump_to(500);
    page.on_scroll(&doc.layout, VIEWPORT);
    assert_eq!(page.active_section(), before);

    page.on_tick(Duration::from_secs(120), &doc.layout, VIEWPORT);
    assert!(page.rotator.is_visible());
}

#[test]
fn repeated_mount_teardown_cycles_are_balanced() {
    let subtitles = Catalog::builtin().profile.subtitles;
    for _ in 0..10 {
        let mut page = PageState::mount(subtitles.iter().copied());
        assert!(!page.is_torn_down());
        page.teardown();
        assert!(page.is_torn_down());
    }
}

#[test]
fn document_reflow_keeps_offset_valid() {
    let catalog = Catalog::builtin();
    let (mut page, wide) = mounted();

    page.scroll.jump_to(wide.layout.max_scroll(VIEWPORT));
    page.on_scroll(&wide.layout, VIEWPORT);

    // A much taller viewport shrinks max_scroll; clamp keeps us inside.
    let tall = Document::build(catalog, WIDTH, 200, None);
    page.scroll.clamp(tall.layout.max_scroll(200));
    assert!(page.offset() <= tall.layout.max_scroll(200));
}
