//! Natural-language description of a sketched composition.
//!
//! [`generate`] is a pure function of its inputs: the same element and region
//! lists always produce the same strings, independent of call history.
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementKind};
use crate::region::LabeledRegion;

pub mod naming;
mod phrases;

pub use phrases::{element_phrase, join_list, region_phrase, Phrase, MIN_DESCRIBED_POINTS};

/// Prose used when there is nothing to describe
pub const EMPTY_DESCRIPTION: &str = "No sketch annotations provided.";

const REGION_WEIGHT: f32 = 0.4;
const TEXT_WEIGHT: f32 = 0.3;
const ANNOTATION_WEIGHT: f32 = 0.2;
const DETAIL_WEIGHT: f32 = 0.1;
/// More elements than this earn the detail bonus
const DETAIL_ELEMENT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionDescription {
    /// Full prose: regions, then text labels, then visual guides
    pub description: String,
    /// Condensed subset (regions and text only) for direct prompt injection
    pub prompt_description: String,
    /// Advisory 0–1 score of how much intent the sketch carries
    pub confidence: f32,
}

/// Describe `elements` and `regions`.
/// Elements are taken in ascending z-order; regions in list order.
pub fn generate(elements: &[Element], regions: &[LabeledRegion]) -> CompositionDescription {
    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|element| element.z_index);

    let region_items: Vec<String> = regions
        .iter()
        .filter(|region| region.has_label())
        .map(region_phrase)
        .collect();

    let mut text_items = Vec::new();
    let mut guide_items = Vec::new();
    for element in &ordered {
        match element_phrase(element) {
            Some(Phrase::Text(text)) => text_items.push(text),
            Some(Phrase::Guide(guide)) => guide_items.push(guide),
            None => {}
        }
    }

    let region_sentence = (!region_items.is_empty())
        .then(|| format!("The composition should include: {}.", region_items.join(", ")));
    let text_sentence = (!text_items.is_empty()).then(|| format!("Include {}.", join_list(&text_items)));
    let guide_sentence =
        (!guide_items.is_empty()).then(|| format!("The sketch shows {}.", join_list(&guide_items)));

    let prompt_description = [&region_sentence, &text_sentence]
        .into_iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let description = [&region_sentence, &text_sentence, &guide_sentence]
        .into_iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    CompositionDescription {
        description: if description.is_empty() {
            EMPTY_DESCRIPTION.to_string()
        } else {
            description
        },
        prompt_description,
        confidence: confidence(elements, regions),
    }
}

fn confidence(elements: &[Element], regions: &[LabeledRegion]) -> f32 {
    let has_text = |element: &&Element| matches!(&element.kind, ElementKind::Text(label) if label.is_valid());
    let mut score = 0.0;
    if regions.iter().any(LabeledRegion::has_label) {
        score += REGION_WEIGHT;
    }
    if elements.iter().any(|element| has_text(&element)) {
        score += TEXT_WEIGHT;
    }
    if elements.iter().any(|element| !has_text(&element)) {
        score += ANNOTATION_WEIGHT;
    }
    if elements.len() > DETAIL_ELEMENT_COUNT {
        score += DETAIL_WEIGHT;
    }
    f32::min(score, 1.0)
}
