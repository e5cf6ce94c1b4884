//! Navigation bar: wordmark, link list, call to action, mobile-menu close.

use crate::bind::markers::{
    MENU_OPEN_CLASS, NAV_CTA, NAV_LINK_CLASS, NAV_LINKS, NAV_LOGO, NAV_TOGGLE,
    TOGGLE_ACTIVE_CLASS,
};
use crate::bind::{BindContext, logo_markup_with, rebuild_list};
use crate::content::{Nav, text};
use crate::dom::{Dom, El, Locator, NodeId};
use crate::events::EventKind;

use super::hero::write_cta;

/// Registration key of the delegated close-menu listener.
pub const MENU_CLOSE_LISTENER: &str = "nav-menu-close";

pub fn bind(cx: &mut BindContext<'_>, nav: &Nav) {
    if let Some(logo) = &nav.logo {
        let markup = logo_markup_with(logo, &cx.options.logo_token, &cx.options.accent_class);
        cx.page.write_markup(NAV_LOGO, &markup);
    }

    let page = &mut *cx.page;
    let rebuilt = rebuild_list(page, NAV_LINKS, &nav.links, |_, link| {
        El::new("li").child(
            El::new("a")
                .attr("href", text(&link.href))
                .class(NAV_LINK_CLASS)
                .text(text(&link.label)),
        )
    });

    // Items are new; the listener sits on the container, which is not.
    if rebuilt.is_some()
        && let Some(container) = page.locate(NAV_LINKS)
    {
        page.listen(
            container,
            EventKind::Click,
            MENU_CLOSE_LISTENER,
            close_menu_on_link_click,
        );
    }

    write_cta(page, NAV_CTA, nav.cta.as_ref());
}

/// Close the mobile menu when a click lands on (or inside) a nav link.
fn close_menu_on_link_click(dom: &mut Dom, container: NodeId, target: NodeId) {
    let link = Locator::parse(&format!(".{NAV_LINK_CLASS}"));
    let toggle = Locator::parse(NAV_TOGGLE);
    let (Ok(link), Ok(toggle)) = (link, toggle) else {
        return;
    };
    if dom.closest(target, &link, container).is_none() {
        return;
    }

    dom.remove_class(container, MENU_OPEN_CLASS);
    if let Some(toggle) = dom.select_first(dom.document(), &toggle) {
        dom.remove_class(toggle, TOGGLE_ACTIVE_CLASS);
    }
}
