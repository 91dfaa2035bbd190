//! Phrase dictionary and the offline substitution algorithm
//!
//! A [`PhraseDictionary`] maps a target language code to a table of known
//! English phrases. Tables are immutable once built and shared across
//! concurrent requests without locking.

use std::collections::HashMap;
use std::sync::OnceLock;
use regex::Regex;
use crate::utils::helpers::capitalize_first;

/// What a dictionary lookup produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryMatch {
    /// The whole input is a known phrase
    Exact(String),
    /// Known phrases and words were substituted in place
    Partial {
        text: String,
        translated_units: usize,
        untranslated_words: usize,
    },
}

impl DictionaryMatch {
    pub fn text(&self) -> &str {
        match self {
            DictionaryMatch::Exact(text) => text,
            DictionaryMatch::Partial { text, .. } => text,
        }
    }

    /// True when some words of the input were left as they were
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            DictionaryMatch::Partial { untranslated_words, .. } if *untranslated_words > 0
        )
    }
}

/// Phrase table for one target language
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    exact: HashMap<String, String>,
    folded: HashMap<String, String>,
    /// Multi-word phrases, longest first
    phrases: Vec<(Vec<char>, String)>,
    words: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    phrase: usize,
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)?").expect("word pattern is valid"))
}

fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn is_single_word(phrase: &str) -> bool {
    word_regex()
        .find(phrase)
        .map(|m| m.start() == 0 && m.end() == phrase.len())
        .unwrap_or(false)
}

impl PhraseTable {
    /// Build a table from English phrase to translation entries
    pub fn new(entries: HashMap<String, String>) -> Self {
        let mut table = PhraseTable::default();
        for (phrase, translation) in entries {
            table.insert(phrase, translation);
        }
        table.sort_phrases();
        table
    }

    fn insert(&mut self, phrase: String, translation: String) {
        let phrase = phrase.trim().to_string();
        if phrase.is_empty() || translation.trim().is_empty() {
            return;
        }
        let folded = fold(&phrase);
        if is_single_word(&phrase) {
            self.words.insert(folded.clone(), translation.clone());
        } else {
            self.phrases.retain(|(chars, _)| chars.iter().collect::<String>() != folded);
            self.phrases.push((folded.chars().collect(), translation.clone()));
        }
        self.folded.insert(folded, translation.clone());
        self.exact.insert(phrase, translation);
    }

    fn sort_phrases(&mut self) {
        // Longest first, ties broken alphabetically so matching is deterministic
        self.phrases
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    }

    /// Merge another table's entries over this one
    pub fn extend(&mut self, entries: HashMap<String, String>) {
        for (phrase, translation) in entries {
            self.insert(phrase, translation);
        }
        self.sort_phrases();
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Look up `text`, substituting known phrases and words when the whole
    /// input is not a known phrase. `None` when nothing at all matched.
    pub fn lookup(&self, text: &str) -> Option<DictionaryMatch> {
        if let Some(translation) = self.exact.get(text) {
            return Some(DictionaryMatch::Exact(translation.clone()));
        }
        if let Some(translation) = self.folded.get(&fold(text.trim())) {
            return Some(DictionaryMatch::Exact(translation.clone()));
        }

        let chars: Vec<char> = text.chars().collect();
        let folded: Vec<char> = chars.iter().map(|&c| fold_char(c)).collect();
        let spans = self.phrase_spans(&folded);

        let mut output = String::with_capacity(text.len());
        let mut translated_units = spans.len();
        let mut untranslated_words = 0;
        let mut cursor = 0;

        for span in &spans {
            let gap: String = chars[cursor..span.start].iter().collect();
            let (segment, hits, misses) = self.substitute_words(&gap);
            output.push_str(&segment);
            translated_units += hits;
            untranslated_words += misses;
            output.push_str(&self.phrases[span.phrase].1);
            cursor = span.end;
        }
        let tail: String = chars[cursor..].iter().collect();
        let (segment, hits, misses) = self.substitute_words(&tail);
        output.push_str(&segment);
        translated_units += hits;
        untranslated_words += misses;

        if translated_units == 0 {
            return None;
        }

        Some(DictionaryMatch::Partial {
            text: output,
            translated_units,
            untranslated_words,
        })
    }

    /// Non-overlapping occurrences of known phrases at word boundaries,
    /// claimed longest phrase first, returned in text order
    fn phrase_spans(&self, folded: &[char]) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        let mut claimed = vec![false; folded.len()];

        for (index, (phrase, _)) in self.phrases.iter().enumerate() {
            let len = phrase.len();
            if len == 0 || len > folded.len() {
                continue;
            }
            let mut start = 0;
            while start + len <= folded.len() {
                let end = start + len;
                if folded[start] == phrase[0]
                    && folded[start..end] == phrase[..]
                    && at_word_boundary(folded, start, end)
                    && !claimed[start..end].contains(&true)
                {
                    claimed[start..end].fill(true);
                    spans.push(Span { start, end, phrase: index });
                    start = end;
                } else {
                    start += 1;
                }
            }
        }

        spans.sort_by_key(|s| s.start);
        spans
    }

    /// Word-by-word substitution; returns the new text, the number of
    /// translated words and the number left untouched
    fn substitute_words(&self, segment: &str) -> (String, usize, usize) {
        let mut hits = 0;
        let mut misses = 0;
        let replaced = word_regex().replace_all(segment, |caps: &regex::Captures<'_>| {
            let word = &caps[0];
            match self.words.get(&fold(word)) {
                Some(translation) => {
                    hits += 1;
                    if word.chars().next().map(char::is_uppercase).unwrap_or(false) {
                        capitalize_first(translation)
                    } else {
                        translation.clone()
                    }
                }
                None => {
                    if word.chars().any(char::is_alphabetic) {
                        misses += 1;
                    }
                    word.to_string()
                }
            }
        });
        (replaced.into_owned(), hits, misses)
    }
}

fn at_word_boundary(text: &[char], start: usize, end: usize) -> bool {
    let left_ok =
        start == 0 || !text[start].is_alphanumeric() || !text[start - 1].is_alphanumeric();
    let right_ok =
        end == text.len() || !text[end - 1].is_alphanumeric() || !text[end].is_alphanumeric();
    left_ok && right_ok
}

/// Static phrase tables keyed by target language code
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    tables: HashMap<String, PhraseTable>,
}

impl PhraseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or merge a language's entries
    pub fn insert_language(&mut self, code: &str, entries: HashMap<String, String>) {
        let code = code.to_lowercase();
        match self.tables.get_mut(&code) {
            Some(table) => table.extend(entries),
            None => {
                self.tables.insert(code, PhraseTable::new(entries));
            }
        }
    }

    pub fn table(&self, code: &str) -> Option<&PhraseTable> {
        self.tables.get(&code.to_lowercase())
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.table(code).is_some()
    }

    /// Look up `text` in the table for `target_language`
    pub fn lookup(&self, target_language: &str, text: &str) -> Option<DictionaryMatch> {
        self.table(target_language)?.lookup(text)
    }

    /// Codes with a table, sorted
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.tables.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Entry counts per language, sorted by code
    pub fn stats(&self) -> Vec<(String, usize)> {
        self.languages()
            .into_iter()
            .map(|code| {
                let count = self.tables.get(&code).map(PhraseTable::len).unwrap_or(0);
                (code, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish() -> PhraseTable {
        let entries = [
            ("Thank you", "Gracias"),
            ("Where is the bathroom?", "¿Dónde está el baño?"),
            ("Where is", "Dónde está"),
            ("Good morning", "Buenos días"),
            ("where", "dónde"),
            ("bathroom", "baño"),
            ("the", "el"),
            ("hi", "hola"),
        ];
        PhraseTable::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_exact_match() {
        let table = spanish();
        assert_eq!(table.lookup("Thank you"), Some(DictionaryMatch::Exact("Gracias".to_string())));
    }

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        let table = spanish();
        assert_eq!(
            table.lookup("  thank YOU "),
            Some(DictionaryMatch::Exact("Gracias".to_string()))
        );
    }

    #[test]
    fn test_longest_phrase_wins() {
        let table = spanish();
        let result = table.lookup("Excuse me, where is the bathroom? Thanks").unwrap();
        assert!(result.text().contains("¿Dónde está el baño?"));
        assert!(result.text().starts_with("Excuse me, "));
        assert!(result.is_degraded());
    }

    #[test]
    fn test_word_by_word_fallback() {
        let table = spanish();
        let result = table.lookup("Can you tell me where the bathroom is?").unwrap();
        assert_eq!(result.text(), "Can you tell me dónde el baño is?");
        match result {
            DictionaryMatch::Partial { translated_units, untranslated_words, .. } => {
                assert_eq!(translated_units, 3);
                assert_eq!(untranslated_words, 5);
            }
            other => panic!("expected partial match, got {:?}", other),
        }
    }

    #[test]
    fn test_phrases_respect_word_boundaries() {
        let table = spanish();
        // "hi" must not match inside "this"
        assert_eq!(table.lookup("this"), None);
    }

    #[test]
    fn test_capitalization_is_kept() {
        let table = spanish();
        let result = table.lookup("Where now").unwrap();
        assert_eq!(result.text(), "Dónde now");
    }

    #[test]
    fn test_full_coverage_is_not_degraded() {
        let table = spanish();
        let result = table.lookup("Good morning, where?").unwrap();
        assert_eq!(result.text(), "Buenos días, dónde?");
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_long_input_scales_linearly() {
        let table = spanish();
        let text = "thank you ".repeat(10_000);

        let started = std::time::Instant::now();
        let result = table.lookup(&text).unwrap();

        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(result.text().matches("Gracias").count(), 10_000);
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_no_match() {
        let table = spanish();
        assert_eq!(table.lookup("Completely unknown words"), None);
    }

    fn entry(phrase: &str, translation: &str) -> HashMap<String, String> {
        HashMap::from([(phrase.to_string(), translation.to_string())])
    }

    #[test]
    fn test_dictionary_languages_are_case_insensitive() {
        let mut dictionary = PhraseDictionary::new();
        dictionary.insert_language("ES", entry("Hello", "Hola"));
        assert!(dictionary.has_language("es"));
        assert_eq!(dictionary.lookup("Es", "Hello").unwrap().text(), "Hola");
        assert!(dictionary.lookup("fr", "Hello").is_none());
    }

    #[test]
    fn test_insert_language_merges() {
        let mut dictionary = PhraseDictionary::new();
        dictionary.insert_language("es", entry("Hello", "Hola"));
        dictionary.insert_language("es", entry("Hello", "Buenas"));
        assert_eq!(dictionary.lookup("es", "Hello").unwrap().text(), "Buenas");
        assert_eq!(dictionary.stats(), vec![("es".to_string(), 1)]);
    }
}
