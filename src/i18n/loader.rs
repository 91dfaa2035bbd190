//! Phrase table loading
//!
//! Built-in tables are embedded at compile time. Extra `<lang>.json` files
//! from a configured directory are merged over them at startup.

use std::collections::HashMap;
use std::path::Path;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, info, warn};
use crate::utils::errors::{Result, VoxifyError};
use super::dictionary::PhraseDictionary;

const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("es", include_str!("../../assets/dictionaries/es.json")),
    ("fr", include_str!("../../assets/dictionaries/fr.json")),
    ("de", include_str!("../../assets/dictionaries/de.json")),
    ("it", include_str!("../../assets/dictionaries/it.json")),
    ("pt", include_str!("../../assets/dictionaries/pt.json")),
    ("ru", include_str!("../../assets/dictionaries/ru.json")),
    ("ja", include_str!("../../assets/dictionaries/ja.json")),
    ("zh", include_str!("../../assets/dictionaries/zh.json")),
    ("hi", include_str!("../../assets/dictionaries/hi.json")),
];

/// Parse one table: a flat JSON object of phrase to translation
pub fn parse_table(lang_code: &str, content: &str) -> Result<HashMap<String, String>> {
    let value: Value = serde_json::from_str(content)?;

    let Value::Object(map) = value else {
        return Err(VoxifyError::Config(format!(
            "Invalid dictionary file format for {}",
            lang_code
        )));
    };

    map.into_iter()
        .map(|(phrase, translation)| match translation {
            Value::String(text) => Ok((phrase, text)),
            _ => Err(VoxifyError::Config(format!(
                "Invalid dictionary entry '{}' for {}: expected a string",
                phrase, lang_code
            ))),
        })
        .collect()
}

impl PhraseDictionary {
    /// Tables shipped with the binary
    pub fn builtin() -> Self {
        let mut dictionary = PhraseDictionary::new();
        for (code, content) in BUILTIN_TABLES {
            match parse_table(code, content) {
                Ok(entries) => dictionary.insert_language(code, entries),
                Err(e) => warn!("Skipping built-in dictionary for {}: {}", code, e),
            }
        }
        dictionary
    }

    /// Merge every `<lang>.json` file in `dir` into this dictionary
    pub async fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.exists() {
            return Err(VoxifyError::Config(format!(
                "Dictionary directory not found: {}",
                dir.display()
            )));
        }

        let mut loaded = 0;
        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(lang_code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path).await?;
            let table = parse_table(lang_code, &content)?;
            debug!("Loaded {} dictionary entries for {}", table.len(), lang_code);
            self.insert_language(lang_code, table);
            loaded += 1;
        }

        info!("Loaded {} dictionary files from {}", loaded, dir.display());
        Ok(loaded)
    }
}
