//! services/app/src/prompt.rs
//!
//! Builds the instruction text sent to the generation endpoint. A fixed
//! persona description is attached identically to every request; the per-call
//! random seed is embedded in the prompt text itself (not as an API
//! parameter) to discourage the remote model from repeating cached phrasing.

use rand::Rng;

/// The fixed persona description attached to every generation request.
pub const PERSONA_INSTRUCTION: &str = r#"You are Harvey Specter from the TV show Suits.
Your personality is:
- Extremely confident, borderline arrogant, but backed by skill.
- You value winning, loyalty, and closing the deal above all else.
- You do not use "fluff" or overly emotional language. You are sharp, direct, and pragmatic.
- You often use metaphors related to poker, boxing, or war.
- You dress well, you speak well, and you don't apologize for being the best.

When generating content, strictly adhere to this persona. Never break character."#;

const TOPIC_QUOTE_TEMPLATE: &str = r#"Give me a short, punchy, unique quote about "{topic}" in the style of Harvey Specter. Do not repeat generic phrases. (Random seed: {seed})"#;

const GENERIC_QUOTE_TEMPLATE: &str = "Give me a random, iconic, and unique advice or quote about winning, life, or business in the style of Harvey Specter. Make it different from the usual ones. (Random seed: {seed})";

const ADVICE_TEMPLATE: &str = r#"The user is in this situation: "{situation}".
Provide advice as Harvey Specter.

Structure the response in JSON format with two keys:
1. "advice": A direct, punchy statement telling them what to do.
2. "strategy": A brief (1-2 sentences) explanation of the strategic mindset behind it."#;

/// Draws a fresh randomization seed, uniform over a large range.
pub fn random_seed() -> u32 {
    rand::thread_rng().gen_range(0..1_000_000)
}

/// Builds the quote prompt. A missing or blank topic requests a generic
/// iconic quote instead.
pub fn quote_prompt(topic: Option<&str>, seed: u32) -> String {
    match topic {
        Some(topic) if !topic.trim().is_empty() => TOPIC_QUOTE_TEMPLATE
            .replace("{topic}", topic.trim())
            .replace("{seed}", &seed.to_string()),
        _ => GENERIC_QUOTE_TEMPLATE.replace("{seed}", &seed.to_string()),
    }
}

/// Builds the advice prompt, embedding the situation description verbatim.
pub fn advice_prompt(situation: &str) -> String {
    ADVICE_TEMPLATE.replace("{situation}", situation)
}
