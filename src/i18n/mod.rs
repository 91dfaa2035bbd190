//! Language data
//!
//! Phrase dictionaries used by the offline translation strategy and the
//! code to name table used when building prompts.

pub mod dictionary;
pub mod languages;
pub mod loader;

pub use dictionary::{DictionaryMatch, PhraseDictionary, PhraseTable};
pub use languages::{display_name, language_name};
pub use loader::parse_table;
