//! End-to-end binding of the fixture landing page.
//!
//! The skeleton in `tests/fixtures/skeleton.html` carries every marker the
//! binder knows about; `content.json` fills all regions.

use std::fs;

use copydeck::dom::serialize::inner_html;
use copydeck::{
    BindOptions, BindOutcome, Binder, DirSource, EventKind, LoadError, Page, RecordingObserver,
    Region, StaticSource,
};
use proptest::prelude::*;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

fn skeleton() -> String {
    fs::read_to_string(fixture_path("skeleton.html")).expect("Failed to read skeleton")
}

fn content() -> Vec<u8> {
    fs::read(fixture_path("content.json")).expect("Failed to read content")
}

fn bound_page() -> Page {
    let mut page = Page::parse(&skeleton());
    let outcome = Binder::default().run(&StaticSource::json(content()), &mut page);
    assert!(outcome.is_bound());
    page
}

fn texts(page: &Page, selector: &str) -> Vec<String> {
    page.locate_all(selector)
        .iter()
        .map(|&id| page.dom().deep_text(id))
        .collect()
}

// ============================================================================
// Full document
// ============================================================================

#[test]
fn test_all_regions_bound() {
    let mut page = Page::parse(&skeleton());
    let outcome = Binder::default().run(&StaticSource::json(content()), &mut page);

    match outcome {
        BindOutcome::Bound(regions) => assert_eq!(regions, Region::ALL.to_vec()),
        BindOutcome::Skipped(e) => panic!("content should load: {e}"),
    }
}

#[test]
fn test_meta_and_hero() {
    let page = bound_page();

    assert_eq!(
        page.text_of("title").unwrap(),
        "NosoTrack | Early warning for hospital infections"
    );
    let description = page.locate(r#"meta[name="description"]"#).unwrap();
    assert_eq!(
        page.dom().get_attr(description, "content"),
        Some("Surveillance signals before the outbreak.")
    );

    assert_eq!(
        page.inner_html(".hero-title").unwrap(),
        "See outbreaks<br><em>before</em> they spread"
    );
    assert_eq!(page.text_of(".hero-btn-primary").unwrap(), "Request a demo");
    let secondary = page.locate(".hero-btn-secondary").unwrap();
    assert_eq!(page.dom().get_attr(secondary, "href"), Some("#process"));
}

#[test]
fn test_logo_accent_in_nav_and_footer() {
    let page = bound_page();
    let expected = r#"Noso<span class="accent">Track</span>"#;
    assert_eq!(page.inner_html(".nav-logo").unwrap(), expected);
    assert_eq!(page.inner_html(".footer-logo").unwrap(), expected);
}

#[test]
fn test_list_counts() {
    let page = bound_page();

    assert_eq!(page.locate_all(".nav-links > li > a.nav-link").len(), 4);
    assert_eq!(page.locate_all(".marquee-track > .marquee-item").len(), 8);
    assert_eq!(page.locate_all(".about-text > p").len(), 2);
    assert_eq!(page.locate_all(".pub-card").len(), 3);
    assert_eq!(page.locate_all(".team-grid > .team-card").len(), 3);
    assert_eq!(page.locate_all(".footer-links > li > a").len(), 2);
}

#[test]
fn test_marquee_is_doubled_in_order() {
    let page = bound_page();
    assert_eq!(
        texts(&page, ".marquee-item"),
        vec![
            "Wastewater",
            "Lab results",
            "Admissions",
            "Antibiotic use",
            "Wastewater",
            "Lab results",
            "Admissions",
            "Antibiotic use",
        ]
    );
}

#[test]
fn test_process_cards() {
    let page = bound_page();

    assert_eq!(texts(&page, ".step-num"), vec!["01", "02", "03", "04"]);
    assert_eq!(texts(&page, ".card-title"), vec!["Lab results", "Admissions"]);

    let feature = page.locate(".engine-feature .feature-text").unwrap();
    assert_eq!(
        inner_html(page.dom(), feature).unwrap(),
        "<strong>Spatio-temporal</strong> clustering by ward and week"
    );
    assert_eq!(page.locate_all(".engine-feature .icon").len(), 2);
}

#[test]
fn test_stats_bound_positionally() {
    let page = bound_page();
    assert_eq!(texts(&page, ".stat-value"), vec!["12", "5d", "0"]);
    assert_eq!(
        texts(&page, ".stat-detail"),
        vec!["in the pilot", "than manual review", ""]
    );
}

#[test]
fn test_contact_icon_identity() {
    let mut page = Page::parse(&skeleton());
    let icon = page.locate(".contact-github svg").unwrap();

    Binder::default().run(&StaticSource::json(content()), &mut page);

    let link = page.locate(".contact-github").unwrap();
    assert_eq!(page.dom().children(link).next(), Some(icon));
    assert_eq!(page.text_of(".contact-github").unwrap(), " Browse our code");
    assert_eq!(
        page.dom().get_attr(link, "href"),
        Some("https://github.com/nosotrack")
    );
    let form = page.locate(".contact-form").unwrap();
    assert_eq!(
        page.dom().get_attr(form, "action"),
        Some("https://forms.example.org/nosotrack")
    );
}

// ============================================================================
// Idempotence and absence
// ============================================================================

#[test]
fn test_binding_twice_is_idempotent() {
    let mut page = Page::parse(&skeleton());
    let source = StaticSource::json(content());
    let mut binder = Binder::default();

    binder.run(&source, &mut page);
    let once = page.to_html().unwrap();
    binder.run(&source, &mut page);

    assert_eq!(page.to_html().unwrap(), once);
    let container = page.locate(".nav-links").unwrap();
    assert_eq!(page.listeners().count_on(container, EventKind::Click), 1);
}

#[test]
fn test_rebinding_grows_arena_by_a_fixed_amount() {
    let mut page = Page::parse(&skeleton());
    let source = StaticSource::json(content());
    let mut binder = Binder::default();

    let mut sizes = vec![page.dom().len()];
    for _ in 0..3 {
        binder.run(&source, &mut page);
        sizes.push(page.dom().len());
    }

    // Replaced nodes stay allocated, but each bind adds the same number.
    let growth: Vec<_> = sizes.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(growth[0] > 0);
    assert!(growth.iter().all(|&g| g == growth[0]));
}

#[test]
fn test_empty_document_leaves_skeleton() {
    let mut page = Page::parse(&skeleton());
    let before = page.to_html().unwrap();

    let outcome = Binder::default().run(&StaticSource::json("{}"), &mut page);

    assert!(matches!(outcome, BindOutcome::Bound(ref regions) if regions.is_empty()));
    assert_eq!(page.to_html().unwrap(), before);
}

#[test]
fn test_missing_hero_title_marker() {
    let skeleton = skeleton().replace(r#"<h1 class="hero-title">Default<br>title</h1>"#, "");
    let mut page = Page::parse(&skeleton);

    Binder::default().run(&StaticSource::json(content()), &mut page);

    assert!(page.locate(".hero-title").is_none());
    assert_eq!(page.text_of(".hero-eyebrow").unwrap(), "Infection surveillance");
    assert_eq!(page.locate_all(".team-card").len(), 3);
}

#[test]
fn test_fourth_step_dropped_with_three_containers() {
    let skeleton = skeleton().replace(r#"data-step="early-warning""#, r#"data-step="removed""#);
    let skeleton = match skeleton.rfind(r#"<div class="process-step" data-step="removed">"#) {
        Some(at) => {
            let end = at + skeleton[at..].find("</div>").unwrap() + "</div>".len();
            format!("{}{}", &skeleton[..at], &skeleton[end..])
        }
        None => panic!("fixture should contain the early-warning step"),
    };
    let mut page = Page::parse(&skeleton);

    Binder::default().run(&StaticSource::json(content()), &mut page);

    assert_eq!(page.locate_all(".process-step").len(), 3);
    assert_eq!(texts(&page, ".step-num"), vec!["01", "02", "03"]);
    assert!(!page.to_html().unwrap().contains("Alerts reach infection control teams."));
}

// ============================================================================
// Legacy encodings
// ============================================================================

const LEGACY_SKELETON: &[u8] = b"<!DOCTYPE html><html><head>\
    <meta charset=\"windows-1252\"><title>caf\xE9</title></head>\
    <body><p class=\"hero-eyebrow\">caf\xE9</p></body></html>";

#[test]
fn test_legacy_skeleton_output_matches_declared_charset() {
    let mut page = Page::parse_bytes(LEGACY_SKELETON);
    let content = r#"{"hero": {"eyebrow": "café crème"}}"#;
    assert!(Binder::default().run(&StaticSource::json(content), &mut page).is_bound());

    let bytes = page.to_html().unwrap().into_bytes();
    let label = page.dom().get_attr(page.locate("meta[charset]").unwrap(), "charset");
    let encoding = encoding_rs::Encoding::for_label(label.unwrap().as_bytes()).unwrap();
    let (decoded, _, malformed) = encoding.decode(&bytes);

    assert!(!malformed);
    assert!(decoded.contains("<title>café</title>"));
    assert!(decoded.contains(r#"<p class="hero-eyebrow">café crème</p>"#));
}

// ============================================================================
// Acquisition failure
// ============================================================================

#[test]
fn test_missing_content_file_leaves_page_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let skeleton_path = dir.path().join("index.html");
    fs::write(&skeleton_path, skeleton()).unwrap();

    let mut page = Page::parse_bytes(&fs::read(&skeleton_path).unwrap());
    let before = page.to_html().unwrap();

    let outcome = Binder::default().run(&DirSource::beside(&skeleton_path), &mut page);

    assert!(matches!(
        outcome,
        BindOutcome::Skipped(LoadError::Status { status: 404, .. })
    ));
    assert_eq!(page.to_html().unwrap(), before);
}

#[test]
fn test_malformed_content_leaves_page_unchanged() {
    let mut page = Page::parse(&skeleton());
    let before = page.to_html().unwrap();

    let outcome = Binder::default().run(&StaticSource::json("{\"hero\": "), &mut page);

    assert!(matches!(outcome, BindOutcome::Skipped(LoadError::Malformed { .. })));
    assert_eq!(page.to_html().unwrap(), before);
}

#[test]
fn test_dir_source_with_custom_resource() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("copy.en.json"), content()).unwrap();

    let mut page = Page::parse(&skeleton());
    let options = BindOptions {
        content_resource: "copy.en.json".to_string(),
        ..BindOptions::default()
    };
    let outcome = Binder::new(options).run(&DirSource::new(dir.path()), &mut page);

    assert!(outcome.is_bound());
    assert_eq!(page.text_of(".footer-copy").unwrap(), "NosoTrack 2026");
}

// ============================================================================
// Reveal and menu behaviour
// ============================================================================

#[test]
fn test_reveal_observer_sees_generated_cards() {
    let mut page = Page::parse(&skeleton());
    let mut binder =
        Binder::new(BindOptions::default()).with_observer(RecordingObserver::default());
    binder.run(&StaticSource::json(content()), &mut page);

    let mut expected = page.locate_all(".pub-card");
    expected.extend(page.locate_all(".team-card"));
    assert_eq!(binder.into_observer().observed, expected);

    let styles: Vec<_> = page
        .locate_all(".team-card")
        .iter()
        .map(|&id| page.dom().get_attr(id, "style").map(str::to_string))
        .collect();
    assert_eq!(
        styles,
        vec![
            None,
            Some("transition-delay: 0.1s".to_string()),
            Some("transition-delay: 0.2s".to_string()),
        ]
    );
}

#[test]
fn test_nav_link_click_closes_menu() {
    let mut page = bound_page();
    let links = page.locate(".nav-links").unwrap();
    let toggle = page.locate(".nav-toggle").unwrap();
    page.dom_mut().add_class(links, "open");
    page.dom_mut().add_class(toggle, "active");

    let link = page.locate_all(".nav-link")[2];
    assert_eq!(page.dispatch(EventKind::Click, link), 1);

    assert!(!page.dom().has_class(links, "open"));
    assert!(!page.dom().has_class(toggle, "active"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_text_writes_stay_inert(value in "[ -~]{0,40}") {
        let mut page = Page::parse(r#"<p class="hero-subtitle">x</p>"#);
        page.write_text(".hero-subtitle", &value);

        let reparsed = Page::parse(&page.to_html().unwrap());
        prop_assert_eq!(reparsed.text_of(".hero-subtitle").unwrap(), value);
        let subtitle = reparsed.locate(".hero-subtitle").unwrap();
        prop_assert_eq!(reparsed.dom().element_children(subtitle).count(), 0);
    }
}
