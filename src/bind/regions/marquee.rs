//! Scrolling marquee strip.

use crate::bind::markers::MARQUEE_TRACK;
use crate::bind::{BindContext, rebuild_list};
use crate::dom::El;

/// Items are rendered twice back to back so the CSS scroll loops without a
/// visible seam.
pub fn bind(cx: &mut BindContext<'_>, items: &[String]) {
    rebuild_list(cx.page, MARQUEE_TRACK, items.iter().chain(items), |_, item| {
        El::new("span").class("marquee-item").text(item.as_str())
    });
}
