//! Hero banner: eyebrow, multi-line title, subtitle, two calls to action.

use crate::bind::BindContext;
use crate::bind::markers::{
    HERO_EYEBROW, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA, HERO_SUBTITLE, HERO_TITLE,
};
use crate::content::{Hero, Link, text};
use crate::page::Page;

pub fn bind(cx: &mut BindContext<'_>, hero: &Hero) {
    let page = &mut *cx.page;
    page.write_text(HERO_EYEBROW, text(&hero.eyebrow));
    page.write_lines(HERO_TITLE, &hero.title);
    page.write_text(HERO_SUBTITLE, text(&hero.subtitle));
    write_cta(page, HERO_PRIMARY_CTA, hero.primary_cta.as_ref());
    write_cta(page, HERO_SECONDARY_CTA, hero.secondary_cta.as_ref());
}

/// An absent CTA keeps the skeleton's button as authored.
pub(super) fn write_cta(page: &mut Page, selector: &str, cta: Option<&Link>) {
    if let Some(cta) = cta {
        page.write_link(selector, text(&cta.href), text(&cta.label));
    }
}
