//! Selectors the skeleton must expose.
//!
//! Any of these may be missing; the corresponding write is skipped.

// meta
pub const DOC_TITLE: &str = "title";
pub const META_DESCRIPTION: &str = r#"meta[name="description"]"#;

// nav
pub const NAV_LOGO: &str = ".nav-logo";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_CTA: &str = ".nav-cta";
/// Open-state classes toggled by the mobile menu.
pub const MENU_OPEN_CLASS: &str = "open";
pub const TOGGLE_ACTIVE_CLASS: &str = "active";

// hero
pub const HERO_EYEBROW: &str = ".hero-eyebrow";
pub const HERO_TITLE: &str = ".hero-title";
pub const HERO_SUBTITLE: &str = ".hero-subtitle";
pub const HERO_PRIMARY_CTA: &str = ".hero-btn-primary";
pub const HERO_SECONDARY_CTA: &str = ".hero-btn-secondary";

// marquee
pub const MARQUEE_TRACK: &str = ".marquee-track";

// section headings, scoped by section id
pub const SECTION_TAG: &str = ".section-tag";
pub const SECTION_TITLE: &str = ".section-title";
pub const SECTION_SUBTITLE: &str = ".section-subtitle";

// about
pub const ABOUT: &str = "#about";
pub const ABOUT_TEXT: &str = ".about-text";
pub const STAT: &str = ".stat";
pub const STAT_VALUE: &str = ".stat-value";
pub const STAT_LABEL: &str = ".stat-label";
pub const STAT_DETAIL: &str = ".stat-detail";

// process
pub const PROCESS: &str = "#process";
pub const PROCESS_STEP: &str = ".process-step";
pub const STEP_NUM: &str = ".step-num";
pub const STEP_LABEL: &str = ".step-label";
pub const STEP_TAG: &str = ".step-tag";
pub const STEP_TITLE: &str = ".step-title";
pub const STEP_DESC: &str = ".step-desc";
pub const INPUT_CARD: &str = ".input-card";
pub const CARD_TAG: &str = ".card-tag";
pub const CARD_TITLE: &str = ".card-title";
pub const CARD_DESC: &str = ".card-desc";
pub const ENGINE_FEATURE: &str = ".engine-feature";
pub const FEATURE_TEXT: &str = ".feature-text";

/// Selector for the container of one named step.
pub fn step(id: &str) -> String {
    format!(r#"[data-step="{id}"]"#)
}

// research
pub const RESEARCH: &str = "#research";
pub const RESEARCH_INTRO: &str = ".research-intro";
/// First grid holds publications, second holds software.
pub const PUB_GRID: &str = ".pub-grid";

// team
pub const TEAM: &str = "#team";
pub const TEAM_GRID: &str = ".team-grid";

// contact
pub const CONTACT: &str = "#contact";
pub const CONTACT_SUBTITLE: &str = ".contact-subtitle";
pub const CONTACT_GITHUB: &str = ".contact-github";
pub const CONTACT_FORM: &str = ".contact-form";

// footer
pub const FOOTER_LOGO: &str = ".footer-logo";
pub const FOOTER_LINKS: &str = ".footer-links";
pub const FOOTER_COPY: &str = ".footer-copy";

/// Class the page's reveal observer animates.
pub const REVEAL_CLASS: &str = "reveal";

/// `"#about .section-tag"` style scoping.
pub fn within(section: &str, slot: &str) -> String {
    format!("{section} {slot}")
}
