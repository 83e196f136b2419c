//! Prompt assembly for brief generation.
//!
//! The system text pins the output contract (bare JSON, brand-faithful);
//! the user text embeds the DNA voice, the exemplar list, and the caller's
//! input, all serialized as JSON.

use crate::dtos::GenerateBriefRequest;
use crate::models::{BrandDna, Exemplar};
use crate::services::providers::Prompt;

const SYSTEM_PROMPT: &str = "You are an advertising studio's creative engine. \
Your sole purpose is to generate a creative brief in JSON format. Adhere \
strictly to the brand DNA and study the provided exemplars for style. Output \
nothing but the JSON object, conforming precisely to the requested schema. Do \
not include any commentary, pleasantries, or markdown formatting like ```json.";

pub fn build_brief_prompt(
    dna: &BrandDna,
    exemplars: &[Exemplar],
    input: &GenerateBriefRequest,
) -> Result<Prompt, serde_json::Error> {
    let user = format!(
        "Here is the Brand DNA: {}\n\
         Here are examples of our past work: {}\n\
         Now, generate a brief for this input: {}",
        serde_json::to_string(&dna.voice)?,
        serde_json::to_string(exemplars)?,
        serde_json::to_string(input)?,
    );

    Ok(Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    })
}
