//! About section: heading, markup paragraphs, stat cards.

use crate::bind::markers::{
    ABOUT, ABOUT_TEXT, STAT, STAT_DETAIL, STAT_LABEL, STAT_VALUE, within,
};
use crate::bind::{BindContext, bind_positional, rebuild_list};
use crate::content::{About, text};
use crate::dom::El;

use super::section_heading;

pub fn bind(cx: &mut BindContext<'_>, about: &About) {
    let page = &mut *cx.page;
    section_heading(page, ABOUT, about.tag.as_deref(), &about.title);

    rebuild_list(page, &within(ABOUT, ABOUT_TEXT), &about.paragraphs, |_, paragraph| {
        El::new("p").markup(paragraph.as_str())
    });

    // Stat cards carry their own styling in the skeleton; fill them in place.
    let slots = page.locate_all(&within(ABOUT, STAT));
    bind_positional(page, &slots, &about.stats, |page, slot, stat| {
        page.write_text_in(slot, STAT_VALUE, text(&stat.value));
        page.write_text_in(slot, STAT_LABEL, text(&stat.label));
        page.write_text_in(slot, STAT_DETAIL, text(&stat.detail));
    });
}
