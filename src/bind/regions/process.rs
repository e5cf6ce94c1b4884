//! Process / pipeline section.
//!
//! The four steps are not a list: each has a bespoke card in the skeleton
//! (icons, connectors), tagged with `data-step`. Badges are matched to the
//! `.process-step` containers by position; everything else is addressed
//! through the step's own container.

use crate::bind::markers::{
    CARD_DESC, CARD_TAG, CARD_TITLE, ENGINE_FEATURE, FEATURE_TEXT, INPUT_CARD, PROCESS,
    PROCESS_STEP, SECTION_SUBTITLE, SECTION_TAG, SECTION_TITLE, STEP_DESC, STEP_LABEL, STEP_NUM,
    STEP_TAG, STEP_TITLE, step, within,
};
use crate::bind::{BindContext, bind_positional};
use crate::content::{Card, EngineStep, Feature, InputsStep, PlainStep, Process, Steps, text};
use crate::dom::{El, NodeId};
use crate::page::Page;

/// Logical step identity, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Inputs,
    Anonymisation,
    Engine,
    EarlyWarning,
}

impl StepId {
    pub const ORDER: [StepId; 4] = [
        StepId::Inputs,
        StepId::Anonymisation,
        StepId::Engine,
        StepId::EarlyWarning,
    ];

    /// Value of the skeleton's `data-step` attribute.
    pub fn marker(self) -> &'static str {
        match self {
            StepId::Inputs => "inputs",
            StepId::Anonymisation => "anonymisation",
            StepId::Engine => "engine",
            StepId::EarlyWarning => "early-warning",
        }
    }
}

/// Number and label shown on a step's badge.
struct Badge<'a> {
    num: Option<&'a str>,
    label: Option<&'a str>,
}

fn badges(steps: &Steps) -> Vec<Option<Badge<'_>>> {
    StepId::ORDER
        .iter()
        .map(|id| match id {
            StepId::Inputs => steps.inputs.as_ref().map(|s| Badge {
                num: s.step_num.as_deref(),
                label: s.step_label.as_deref(),
            }),
            StepId::Anonymisation => steps.anonymisation.as_ref().map(|s| Badge {
                num: s.step_num.as_deref(),
                label: s.step_label.as_deref(),
            }),
            StepId::Engine => steps.engine.as_ref().map(|s| Badge {
                num: s.step_num.as_deref(),
                label: s.step_label.as_deref(),
            }),
            StepId::EarlyWarning => steps.early_warning.as_ref().map(|s| Badge {
                num: s.step_num.as_deref(),
                label: s.step_label.as_deref(),
            }),
        })
        .collect()
}

pub fn bind(cx: &mut BindContext<'_>, process: &Process) {
    let page = &mut *cx.page;
    page.write_text(&within(PROCESS, SECTION_TAG), text(&process.tag));
    page.write_markup(&within(PROCESS, SECTION_TITLE), text(&process.title));
    page.write_text(&within(PROCESS, SECTION_SUBTITLE), text(&process.subtitle));

    let steps = &process.steps;
    bind_badges(page, steps);

    if let Some(inputs) = &steps.inputs {
        bind_inputs(page, inputs);
    }
    if let Some(anonymisation) = &steps.anonymisation {
        bind_plain(page, StepId::Anonymisation, anonymisation);
    }
    if let Some(engine) = &steps.engine {
        bind_engine(page, engine);
    }
    if let Some(early_warning) = &steps.early_warning {
        bind_plain(page, StepId::EarlyWarning, early_warning);
    }
}

/// Container `i` gets logical step `i`'s badge. Returns the number bound.
fn bind_badges(page: &mut Page, steps: &Steps) -> usize {
    let containers = page.locate_all(&within(PROCESS, PROCESS_STEP));
    let badges = badges(steps);
    bind_positional(page, &containers, &badges, |page, container, badge| {
        if let Some(badge) = badge {
            page.write_text_in(container, STEP_NUM, badge.num.unwrap_or_default());
            page.write_text_in(container, STEP_LABEL, badge.label.unwrap_or_default());
        }
    })
}

fn step_container(page: &Page, id: StepId) -> Option<NodeId> {
    page.locate(&within(PROCESS, &step(id.marker())))
}

fn write_triple(
    page: &mut Page,
    scope: NodeId,
    tag: Option<&str>,
    title: Option<&str>,
    desc: Option<&str>,
) {
    page.write_text_in(scope, STEP_TAG, tag.unwrap_or_default());
    page.write_text_in(scope, STEP_TITLE, title.unwrap_or_default());
    page.write_text_in(scope, STEP_DESC, desc.unwrap_or_default());
}

fn bind_plain(page: &mut Page, id: StepId, content: &PlainStep) {
    if let Some(scope) = step_container(page, id) {
        write_triple(
            page,
            scope,
            content.tag.as_deref(),
            content.title.as_deref(),
            content.desc.as_deref(),
        );
    }
}

fn bind_inputs(page: &mut Page, inputs: &InputsStep) {
    let Some(scope) = step_container(page, StepId::Inputs) else {
        return;
    };
    let slots = page.locate_all_in(scope, INPUT_CARD);
    bind_positional(page, &slots, &inputs.cards, bind_card);
}

fn bind_card(page: &mut Page, slot: NodeId, card: &Card) {
    page.write_text_in(slot, CARD_TAG, text(&card.tag));
    page.write_text_in(slot, CARD_TITLE, text(&card.title));
    page.write_text_in(slot, CARD_DESC, text(&card.desc));
}

fn bind_engine(page: &mut Page, engine: &EngineStep) {
    let Some(scope) = step_container(page, StepId::Engine) else {
        return;
    };
    write_triple(
        page,
        scope,
        engine.tag.as_deref(),
        engine.title.as_deref(),
        engine.desc.as_deref(),
    );

    let slots = page.locate_all_in(scope, ENGINE_FEATURE);
    bind_positional(page, &slots, &engine.features, bind_feature);
}

/// Rebuild one feature slot as `<strong>title</strong> desc`.
fn bind_feature(page: &mut Page, slot: NodeId, feature: &Feature) {
    let target = page.locate_in(slot, FEATURE_TEXT).unwrap_or(slot);
    let dom = page.dom_mut();
    dom.clear_children(target);

    let lead = dom.build(El::new("strong").text(text(&feature.title)));
    dom.append(target, lead);

    let desc = text(&feature.desc);
    if !desc.is_empty() {
        dom.append_text(target, &format!(" {desc}"));
    }
}
