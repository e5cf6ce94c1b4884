//! Footer: wordmark, link list, copyright line.

use crate::bind::markers::{FOOTER_COPY, FOOTER_LINKS, FOOTER_LOGO};
use crate::bind::{BindContext, logo_markup_with, rebuild_list};
use crate::content::{Footer, FooterLink, text};
use crate::dom::El;

pub fn bind(cx: &mut BindContext<'_>, footer: &Footer) {
    if let Some(logo) = &footer.logo {
        let markup = logo_markup_with(logo, &cx.options.logo_token, &cx.options.accent_class);
        cx.page.write_markup(FOOTER_LOGO, &markup);
    }

    let page = &mut *cx.page;
    rebuild_list(page, FOOTER_LINKS, &footer.links, |_, link| {
        El::new("li").child(footer_link(link))
    });
    page.write_text(FOOTER_COPY, text(&footer.copy));
}

fn footer_link(link: &FooterLink) -> El {
    let anchor = El::new("a").attr("href", text(&link.href));
    let anchor = if link.external {
        anchor
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    } else {
        anchor
    };
    anchor.text(text(&link.label))
}
