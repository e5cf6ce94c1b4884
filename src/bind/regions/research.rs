//! Research section: heading, intro, publication and software grids.

use crate::bind::markers::{PUB_GRID, RESEARCH, RESEARCH_INTRO, REVEAL_CLASS, within};
use crate::bind::{BindContext, rebuild_children};
use crate::content::{Publication, Research, text};
use crate::dom::El;

use super::section_heading;

pub fn bind(cx: &mut BindContext<'_>, research: &Research) {
    let page = &mut *cx.page;
    section_heading(page, RESEARCH, research.tag.as_deref(), &research.title);
    page.write_markup(&within(RESEARCH, RESEARCH_INTRO), text(&research.intro));

    // First grid lists publications, the second lists software. A missing
    // grid drops its list.
    let grids = page.locate_all(&within(RESEARCH, PUB_GRID));
    for (&grid, entries) in grids.iter().zip([&research.publications, &research.software]) {
        let cards = rebuild_children(page, grid, entries, |_, entry| pub_card(entry));
        for card in cards {
            cx.observer.observe(page.dom(), card);
        }
    }
}

fn pub_card(entry: &Publication) -> El {
    El::new("a")
        .class(&format!("pub-card {REVEAL_CLASS}"))
        .attr("href", text(&entry.url))
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(El::new("span").class("pub-tag").text(text(&entry.tag)))
        .child(El::new("h3").class("pub-title").text(text(&entry.title)))
        .child(El::new("p").class("pub-desc").text(text(&entry.desc)))
}

#[cfg(test)]
mod tests {
    use crate::bind::{BindOptions, Binder};
    use crate::content::ContentDocument;
    use crate::observer::RecordingObserver;
    use crate::page::Page;

    const SKELETON: &str = r#"
        <section id="research">
          <span class="section-tag">tag</span>
          <h2 class="section-title">title</h2>
          <div class="research-intro">intro</div>
          <div class="pub-grid"><a class="pub-card">old</a></div>
          <h3>Software</h3>
          <div class="pub-grid"><a class="pub-card">old</a></div>
        </section>"#;

    fn content() -> ContentDocument {
        ContentDocument::from_json(
            br#"{"research": {
                "tag": "Research",
                "title": ["Peer reviewed"],
                "intro": "All of it is <a href=\"/open\">open</a>.",
                "publications": [
                    {"url": "https://doi.org/1", "tag": "Paper", "title": "Nowcasting", "desc": "2024"},
                    {"url": "https://doi.org/2", "tag": "Paper", "title": "Sewage <signals>"}
                ],
                "software": [
                    {"url": "https://github.com/x", "tag": "R", "title": "toolkit", "desc": "CRAN"}
                ]
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_grids_split_publications_and_software() {
        let mut page = Page::parse(SKELETON);
        Binder::default().bind(&content(), &mut page);

        let grids = page.locate_all(".pub-grid");
        assert_eq!(page.locate_all_in(grids[0], ".pub-card").len(), 2);
        assert_eq!(page.locate_all_in(grids[1], ".pub-card").len(), 1);

        let second = page.locate_all_in(grids[0], ".pub-card")[1];
        assert_eq!(page.dom().get_attr(second, "href"), Some("https://doi.org/2"));
        assert_eq!(page.dom().get_attr(second, "rel"), Some("noopener noreferrer"));
        let title = page.locate_in(second, ".pub-title").unwrap();
        assert_eq!(page.dom().deep_text(title), "Sewage <signals>");
        let desc = page.locate_in(second, ".pub-desc").unwrap();
        assert_eq!(page.dom().deep_text(desc), "");

        assert!(page.locate(".research-intro a").is_some());
        assert_eq!(page.text_of("#research .section-title").unwrap(), "Peer reviewed");
    }

    #[test]
    fn test_cards_are_observed_in_order() {
        let mut page = Page::parse(SKELETON);
        let mut binder =
            Binder::new(BindOptions::default()).with_observer(RecordingObserver::default());
        binder.bind(&content(), &mut page);

        let cards = page.locate_all(".pub-card");
        assert_eq!(binder.observer().observed, cards);
        assert!(cards.iter().all(|&id| page.dom().has_class(id, "reveal")));
    }

    #[test]
    fn test_single_grid_keeps_publications_only() {
        let skeleton = r#"<section id="research"><div class="pub-grid"></div></section>"#;
        let mut page = Page::parse(skeleton);
        Binder::default().bind(&content(), &mut page);

        assert_eq!(page.locate_all(".pub-card").len(), 2);
    }
}
