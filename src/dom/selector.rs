//! Compiled CSS selectors and query helpers over [`Dom`].

use std::fmt;
use std::str::FromStr;

use selectors::context::{MatchingContext, SelectorCaches};
use selectors::parser::{ParseRelative, Selector, SelectorList};

use super::arena::{Dom, NodeId};
use super::element_ref::{ElementRef, PageSelectors};
use crate::error::{Error, Result};

/// A parsed, comma-separated selector list.
#[derive(Clone)]
pub struct Locator {
    source: String,
    selectors: Vec<Selector<PageSelectors>>,
}

impl Locator {
    pub fn parse(source: &str) -> Result<Self> {
        let mut input = cssparser::ParserInput::new(source);
        let mut parser = cssparser::Parser::new(&mut input);
        let list = SelectorList::parse(&PageSelectors, &mut parser, ParseRelative::No)
            .map_err(|_| Error::InvalidSelector(source.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            selectors: list.slice().to_vec(),
        })
    }

    /// The selector text this locator was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether `id` (an element) matches any selector in the list.
    pub fn matches(&self, dom: &Dom, id: NodeId) -> bool {
        if !dom.is_element(id) {
            return false;
        }
        let mut caches = SelectorCaches::default();
        let mut context = matching_context(&mut caches);
        self.matches_with(dom, id, &mut context)
    }

    fn matches_with(
        &self,
        dom: &Dom,
        id: NodeId,
        context: &mut MatchingContext<'_, PageSelectors>,
    ) -> bool {
        let elem = ElementRef::new(dom, id);
        self.selectors.iter().any(|selector| {
            selectors::matching::matches_selector(selector, 0, None, &elem, context)
        })
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locator").field(&self.source).finish()
    }
}

fn matching_context(caches: &mut SelectorCaches) -> MatchingContext<'_, PageSelectors> {
    MatchingContext::new(
        selectors::matching::MatchingMode::Normal,
        None,
        caches,
        selectors::context::QuirksMode::NoQuirks,
        selectors::matching::NeedsSelectorFlags::No,
        selectors::matching::MatchingForInvalidation::No,
    )
}

/// Selector queries, scoped like `Element.querySelector`: candidates are
/// descendants of `scope`, but the selector is matched against the whole tree.
impl Dom {
    pub fn select_first(&self, scope: NodeId, locator: &Locator) -> Option<NodeId> {
        let mut caches = SelectorCaches::default();
        let mut context = matching_context(&mut caches);
        self.descendants(scope)
            .filter(|&id| self.is_element(id))
            .find(|&id| locator.matches_with(self, id, &mut context))
    }

    pub fn select_all(&self, scope: NodeId, locator: &Locator) -> Vec<NodeId> {
        let mut caches = SelectorCaches::default();
        let mut context = matching_context(&mut caches);
        self.descendants(scope)
            .filter(|&id| self.is_element(id))
            .filter(|&id| locator.matches_with(self, id, &mut context))
            .collect()
    }

    /// Nearest inclusive ancestor of `from` matching `locator`, not looking
    /// past `boundary`.
    pub fn closest(&self, from: NodeId, locator: &Locator, boundary: NodeId) -> Option<NodeId> {
        for id in self.ancestors(from) {
            if locator.matches(self, id) {
                return Some(id);
            }
            if id == boundary {
                break;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_document;

    fn locator(s: &str) -> Locator {
        Locator::parse(s).expect("valid selector")
    }

    #[test]
    fn test_tag_and_class_selectors() {
        let dom = parse_document(r#"<div><p class="intro highlight">Hello</p></div>"#);
        let p = dom.find_by_tag("p").unwrap();

        assert!(locator("p").matches(&dom, p));
        assert!(locator(".intro").matches(&dom, p));
        assert!(locator("p.highlight").matches(&dom, p));
        assert!(!locator("div").matches(&dom, p));
        assert!(!locator(".missing").matches(&dom, p));
    }

    #[test]
    fn test_id_and_descendant_selectors() {
        let dom = parse_document(
            r#"<section id="about"><h2 class="section-title">A</h2></section>
               <section id="team"><h2 class="section-title">T</h2></section>"#,
        );
        let root = dom.document();

        let about_title = dom.select_first(root, &locator("#about .section-title")).unwrap();
        assert_eq!(dom.deep_text(about_title), "A");

        let team_title = dom.select_first(root, &locator("#team > .section-title")).unwrap();
        assert_eq!(dom.deep_text(team_title), "T");
    }

    #[test]
    fn test_attribute_selector() {
        let dom = parse_document(
            r#"<div class="process-step" data-step="inputs"></div>
               <div class="process-step" data-step="engine"></div>"#,
        );
        let engine = dom
            .select_first(dom.document(), &locator(r#"[data-step="engine"]"#))
            .unwrap();
        assert_eq!(dom.get_attr(engine, "data-step"), Some("engine"));
    }

    #[test]
    fn test_select_all_in_document_order() {
        let dom = parse_document(r#"<ul><li>a</li><li>b</li><li>c</li></ul>"#);
        let items = dom.select_all(dom.document(), &locator("li"));
        let texts: Vec<_> = items.iter().map(|&id| dom.deep_text(id)).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scoped_query_only_sees_descendants() {
        let dom = parse_document(
            r#"<div id="a"><span class="x">in a</span></div><div id="b"><span class="x">in b</span></div>"#,
        );
        let b = dom.get_by_id("b").unwrap();
        let found = dom.select_first(b, &locator(".x")).unwrap();
        assert_eq!(dom.deep_text(found), "in b");
    }

    #[test]
    fn test_closest_stops_at_boundary() {
        let dom = parse_document(
            r#"<nav class="wrap"><ul class="nav-links"><li><a class="nav-link"><b>x</b></a></li></ul></nav>"#,
        );
        let b = dom.find_by_tag("b").unwrap();
        let ul = dom.find_by_tag("ul").unwrap();

        let link = dom.closest(b, &locator(".nav-link"), ul).unwrap();
        assert_eq!(dom.element_name(link).unwrap().as_ref(), "a");
        assert_eq!(dom.closest(b, &locator(".wrap"), ul), None);
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(matches!(
            Locator::parse("div[["),
            Err(Error::InvalidSelector(s)) if s == "div[["
        ));
    }
}
