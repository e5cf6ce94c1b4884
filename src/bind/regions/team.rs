//! Team section: heading and one generated card per member.

use std::time::Duration;

use crate::bind::markers::{REVEAL_CLASS, TEAM, TEAM_GRID, within};
use crate::bind::{BindContext, rebuild_list};
use crate::content::{Member, Team, text};
use crate::dom::El;

use super::section_heading;

pub fn bind(cx: &mut BindContext<'_>, team: &Team) {
    let page = &mut *cx.page;
    section_heading(page, TEAM, team.tag.as_deref(), &team.title);

    let stagger = cx.options.reveal_stagger;
    let cards = rebuild_list(page, &within(TEAM, TEAM_GRID), &team.members, |index, member| {
        member_card(member, reveal_delay(index, stagger))
    });
    for card in cards.unwrap_or_default() {
        cx.observer.observe(page.dom(), card);
    }
}

/// Inline delay for the card at `index`. The first card has none.
fn reveal_delay(index: usize, stagger: Duration) -> Option<String> {
    if index == 0 {
        return None;
    }
    let delay = stagger * u32::try_from(index).unwrap_or(u32::MAX);
    Some(format!("transition-delay: {}s", delay.as_secs_f64()))
}

fn member_card(member: &Member, delay: Option<String>) -> El {
    let name = text(&member.name);
    El::new("div")
        .class(&format!("team-card {REVEAL_CLASS}"))
        .attr_opt("style", delay)
        .child(
            El::new("div").class("team-photo").child(
                El::new("img")
                    .attr("src", text(&member.photo))
                    .attr("alt", name),
            ),
        )
        .child(El::new("h3").class("team-name").text(name))
        .child(El::new("p").class("team-role").text(text(&member.role)))
        .child(El::new("p").class("team-bio").text(text(&member.bio)))
}
