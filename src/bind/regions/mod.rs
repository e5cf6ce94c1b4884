//! One binding per top-level region of the content document.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod marquee;
pub mod meta;
pub mod nav;
pub mod process;
pub mod research;
pub mod team;

use crate::bind::markers::{SECTION_TAG, SECTION_TITLE, within};
use crate::page::Page;

/// Write a section's tag (text) and multi-line title (markup).
fn section_heading(page: &mut Page, section: &str, tag: Option<&str>, title: &[String]) {
    page.write_text(&within(section, SECTION_TAG), tag.unwrap_or_default());
    page.write_lines(&within(section, SECTION_TITLE), title);
}
