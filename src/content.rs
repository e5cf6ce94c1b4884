//! The content document.
//!
//! Every field is optional: a missing scalar renders as an empty string, a
//! missing sequence renders as an empty list, and a missing region leaves its
//! part of the skeleton untouched. Unknown keys are ignored.

use serde::Deserialize;

/// Root of the content document (`content.json`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    pub meta: Option<Meta>,
    pub nav: Option<Nav>,
    pub hero: Option<Hero>,
    /// `None` when the key is absent, so an absent marquee keeps its
    /// authored items while an explicit `[]` empties the track.
    pub marquee: Option<Vec<String>>,
    pub about: Option<About>,
    pub process: Option<Process>,
    pub research: Option<Research>,
    pub team: Option<Team>,
    pub contact: Option<Contact>,
    pub footer: Option<Footer>,
}

impl ContentDocument {
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

/// Borrow an optional scalar as `&str`, empty when absent.
pub(crate) fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A destination plus visible label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    pub href: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nav {
    pub logo: Option<String>,
    pub links: Vec<Link>,
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub eyebrow: Option<String>,
    pub title: Vec<String>,
    pub subtitle: Option<String>,
    pub primary_cta: Option<Link>,
    pub secondary_cta: Option<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub tag: Option<String>,
    pub title: Vec<String>,
    /// Markup paragraphs.
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    pub label: Option<String>,
    pub value: Option<String>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Process {
    pub tag: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub steps: Steps,
}

/// The four pipeline steps. Each has a bespoke card in the skeleton, so they
/// are named fields rather than a list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Steps {
    pub inputs: Option<InputsStep>,
    pub anonymisation: Option<PlainStep>,
    pub engine: Option<EngineStep>,
    pub early_warning: Option<PlainStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputsStep {
    pub step_num: Option<String>,
    pub step_label: Option<String>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlainStep {
    pub step_num: Option<String>,
    pub step_label: Option<String>,
    pub tag: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineStep {
    pub step_num: Option<String>,
    pub step_label: Option<String>,
    pub tag: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    pub tag: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Feature {
    pub title: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Research {
    pub tag: Option<String>,
    pub title: Vec<String>,
    /// Markup.
    pub intro: Option<String>,
    pub publications: Vec<Publication>,
    pub software: Vec<Publication>,
}

/// A publication or software entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub url: Option<String>,
    pub tag: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub tag: Option<String>,
    pub title: Vec<String>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    pub photo: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub tag: Option<String>,
    pub title: Vec<String>,
    pub subtitle: Option<String>,
    pub github: Option<GithubLink>,
    pub form_action: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GithubLink {
    pub url: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub logo: Option<String>,
    pub links: Vec<FooterLink>,
    pub copy: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterLink {
    pub href: Option<String>,
    pub label: Option<String>,
    pub external: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_a_valid_document() {
        let doc = ContentDocument::from_json(b"{}").unwrap();
        assert!(doc.meta.is_none());
        assert!(doc.marquee.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let doc = ContentDocument::from_json(
            br##"{
                "hero": {"primaryCta": {"href": "#contact", "label": "Talk"}},
                "process": {"steps": {"earlyWarning": {"stepNum": "04"}}},
                "contact": {"formAction": "https://forms.example/x"}
            }"##,
        )
        .unwrap();

        let hero = doc.hero.unwrap();
        assert_eq!(text(&hero.primary_cta.unwrap().label), "Talk");
        let early = doc.process.unwrap().steps.early_warning.unwrap();
        assert_eq!(text(&early.step_num), "04");
        assert_eq!(
            doc.contact.unwrap().form_action.as_deref(),
            Some("https://forms.example/x")
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let doc = ContentDocument::from_json(
            br#"{"team": {"members": [{"name": "Ada"}]}, "footer": {"links": [{"href": "/"}]}}"#,
        )
        .unwrap();
        let member = &doc.team.unwrap().members[0];
        assert_eq!(text(&member.role), "");
        assert!(!doc.footer.unwrap().links[0].external);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert!(ContentDocument::from_json(br#"{"extra": 1, "meta": {"x": true}}"#).is_ok());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        assert!(ContentDocument::from_json(br#"{"marquee": "not a list"}"#).is_err());
        assert!(ContentDocument::from_json(b"<html>").is_err());
    }
}
