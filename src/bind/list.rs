//! The two ways repeated content reaches the skeleton.
//!
//! Homogeneous sequences (nav links, team members) own their container and
//! regenerate every child. Bespoke slots (process steps, stats) already exist
//! in the skeleton and are matched by position.

use crate::dom::{El, NodeId};
use crate::page::Page;

/// Clear `container` and append one `template` element per record, in order.
///
/// Returns the new children, or `None` (having touched nothing) when the
/// container is not in the skeleton.
pub fn rebuild_list<I, F>(
    page: &mut Page,
    container: &str,
    records: I,
    template: F,
) -> Option<Vec<NodeId>>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> El,
{
    let parent = page.locate(container)?;
    Some(rebuild_children(page, parent, records, template))
}

/// [`rebuild_list`] for a container that has already been located.
pub fn rebuild_children<I, F>(
    page: &mut Page,
    parent: NodeId,
    records: I,
    mut template: F,
) -> Vec<NodeId>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> El,
{
    let dom = page.dom_mut();
    dom.clear_children(parent);

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let node = dom.build(template(index, record));
            dom.append(parent, node);
            node
        })
        .collect()
}

/// Bind `records[i]` to `slots[i]` for the overlapping prefix.
///
/// Surplus slots keep their authored content and surplus records are
/// dropped. Returns how many pairs were bound.
pub fn bind_positional<T, F>(
    page: &mut Page,
    slots: &[NodeId],
    records: &[T],
    mut bind: F,
) -> usize
where
    F: FnMut(&mut Page, NodeId, &T),
{
    for (&slot, record) in slots.iter().zip(records) {
        bind(page, slot, record);
    }
    slots.len().min(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(_: usize, label: &str) -> El {
        El::new("li").text(label)
    }

    fn texts(page: &Page, selector: &str) -> Vec<String> {
        page.locate_all(selector)
            .iter()
            .map(|&id| page.dom().deep_text(id))
            .collect()
    }

    #[test]
    fn test_rebuild_replaces_all_children_in_order() {
        let mut page = Page::parse(r#"<ul class="list"><li>stale</li><!-- note --> text</ul>"#);
        let created = rebuild_list(&mut page, ".list", ["a", "b", "c"], item).unwrap();

        assert_eq!(created.len(), 3);
        let ul = page.locate(".list").unwrap();
        assert_eq!(page.dom().children(ul).collect::<Vec<_>>(), created);
        assert_eq!(texts(&page, ".list li"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rebuild_twice_is_stable() {
        let mut page = Page::parse(r#"<ul class="list"></ul>"#);
        rebuild_list(&mut page, ".list", ["a", "b"], item);
        let once = page.to_html().unwrap();
        rebuild_list(&mut page, ".list", ["a", "b"], item);
        assert_eq!(page.to_html().unwrap(), once);
    }

    #[test]
    fn test_rebuild_missing_container_is_noop() {
        let mut page = Page::parse("<ul><li>keep</li></ul>");
        assert!(rebuild_list(&mut page, ".list", ["a"], item).is_none());
        assert_eq!(texts(&page, "li"), vec!["keep"]);
    }

    #[test]
    fn test_rebuild_with_empty_records_clears() {
        let mut page = Page::parse(r#"<ul class="list"><li>x</li></ul>"#);
        let created = rebuild_list(&mut page, ".list", Vec::<&str>::new(), item).unwrap();
        assert!(created.is_empty());
        assert!(page.locate(".list li").is_none());
    }

    #[test]
    fn test_positional_binds_overlap_only() {
        let mut page = Page::parse(
            r#"<div class="s">1</div><div class="s">2</div><div class="s">3</div>"#,
        );
        let slots = page.locate_all(".s");

        let bound = bind_positional(&mut page, &slots, &["a", "b"], |page, slot, v| {
            page.dom_mut().set_text(slot, v);
        });
        assert_eq!(bound, 2);
        assert_eq!(texts(&page, ".s"), vec!["a", "b", "3"]);

        let bound = bind_positional(&mut page, &slots[..1], &["x", "y", "z"], |page, slot, v| {
            page.dom_mut().set_text(slot, v);
        });
        assert_eq!(bound, 1);
        assert_eq!(texts(&page, ".s"), vec!["x", "b", "3"]);
    }
}
