//! Deterministic stand-in translations
//!
//! The last link of the chain. Output is obviously not a real translation,
//! but it is never empty and always the same for the same input.

use async_trait::async_trait;
use crate::models::{Strategy, Translated, TranslationRequest};
use crate::utils::errors::StrategyOutcome;
use crate::utils::helpers::language_seed;
use super::strategy::TranslationStrategy;

/// Per-word transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTransform {
    Suffix(&'static str),
    Prefix(&'static str),
    /// Drop ASCII lowercase vowels, then append
    StripVowels(&'static str),
    /// Keep all but the last two characters, at least two
    Truncate,
    /// Append the infix followed by the word's first two characters
    Echo(&'static str),
    Reverse,
    /// Append `-{code}`
    CodeSuffix,
}

impl WordTransform {
    pub fn apply(&self, word: &str, code: &str) -> String {
        match self {
            WordTransform::Suffix(suffix) => format!("{}{}", word, suffix),
            WordTransform::Prefix(prefix) => format!("{}{}", prefix, word),
            WordTransform::StripVowels(suffix) => {
                let stripped: String = word.chars().filter(|c| !"aeiou".contains(*c)).collect();
                format!("{}{}", stripped, suffix)
            }
            WordTransform::Truncate => {
                let len = word.chars().count();
                word.chars().take(len.saturating_sub(2).max(2)).collect()
            }
            WordTransform::Echo(infix) => {
                let head: String = word.chars().take(2).collect();
                format!("{}{}{}", word, infix, head)
            }
            WordTransform::Reverse => word.chars().rev().collect(),
            WordTransform::CodeSuffix => format!("{}-{}", word, code),
        }
    }
}

/// Language families with a fixed transform
const FAMILY_TRANSFORMS: &[(&[&str], WordTransform)] = &[
    (&["pt", "ro"], WordTransform::Suffix("o")),
    (&["ru", "pl", "cs", "bg"], WordTransform::StripVowels("ski")),
    (&["sv", "no", "da", "fi"], WordTransform::Suffix("ø")),
    (&["ko", "th", "vi"], WordTransform::Truncate),
    (&["ar", "he", "fa"], WordTransform::Echo("al")),
];

/// Rotation for codes outside the family table, indexed by seed
const ROTATION: [WordTransform; 5] = [
    WordTransform::Suffix("a"),
    WordTransform::Prefix("le"),
    WordTransform::Suffix("en"),
    WordTransform::Reverse,
    WordTransform::CodeSuffix,
];

fn family_transform(code: &str) -> Option<WordTransform> {
    let code = code.to_ascii_lowercase();
    FAMILY_TRANSFORMS
        .iter()
        .find(|(codes, _)| codes.contains(&code.as_str()))
        .map(|(_, transform)| *transform)
}

/// Mangle `text` for `code`: each space-separated word is transformed and
/// the code is appended in parentheses
pub fn generate(text: &str, code: &str) -> String {
    let family = family_transform(code);
    let seed = language_seed(code) as usize;

    let words: Vec<String> = text
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            let transform = family.unwrap_or(ROTATION[(seed + index) % ROTATION.len()]);
            transform.apply(word, code)
        })
        .collect();

    format!("{} ({})", words.join(" "), code)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockGenerator;

impl MockGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Never fails, always degraded
    pub fn produce(&self, request: &TranslationRequest) -> Translated {
        Translated::partial(generate(&request.text, &request.target_language))
    }
}

#[async_trait]
impl TranslationStrategy for MockGenerator {
    fn kind(&self) -> Strategy {
        Strategy::Generated
    }

    async fn translate(&self, request: &TranslationRequest) -> StrategyOutcome {
        Ok(self.produce(request))
    }
}
