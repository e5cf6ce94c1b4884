//! Contact section: heading, subtitle, GitHub link, form endpoint.

use crate::bind::BindContext;
use crate::bind::markers::{CONTACT, CONTACT_FORM, CONTACT_GITHUB, CONTACT_SUBTITLE, within};
use crate::content::{Contact, text};

use super::section_heading;

pub fn bind(cx: &mut BindContext<'_>, contact: &Contact) {
    let page = &mut *cx.page;
    section_heading(page, CONTACT, contact.tag.as_deref(), &contact.title);
    page.write_text(&within(CONTACT, CONTACT_SUBTITLE), text(&contact.subtitle));

    // The link holds an icon next to its label; patch rather than rewrite.
    if let Some(github) = &contact.github {
        page.patch_link_label(CONTACT_GITHUB, text(&github.url), text(&github.label));
    }
    if let Some(action) = &contact.form_action {
        page.write_attr(CONTACT_FORM, "action", action);
    }
}
