//! `<title>` and the meta description.

use crate::bind::BindContext;
use crate::bind::markers::{DOC_TITLE, META_DESCRIPTION};
use crate::content::{Meta, text};

pub fn bind(cx: &mut BindContext<'_>, meta: &Meta) {
    cx.page.write_text(DOC_TITLE, text(&meta.title));
    cx.page
        .write_attr(META_DESCRIPTION, "content", text(&meta.description));
}
