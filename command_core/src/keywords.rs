//! Keyword tables for action, medium, list and item detection

use crate::error::ConfigError;
use crate::normalize::normalize_keyword;
use crate::types::{ActionType, Medium};
use ahash::AHashSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

static DEFAULT_TABLES: Lazy<Arc<KeywordTables>> = Lazy::new(|| Arc::new(KeywordTables::french()));

/// Shared built-in French tables
pub fn default_tables() -> Arc<KeywordTables> {
    Arc::clone(&DEFAULT_TABLES)
}

/// Serialized form of the keyword tables.
///
/// `BTreeMap` keys iterate in enum declaration order, so match priority does
/// not depend on the order keys appear in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    pub actions: BTreeMap<ActionType, Vec<String>>,
    pub media: BTreeMap<Medium, Vec<String>>,
    pub list_nouns: Vec<String>,
    pub item_nouns: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| w.to_string()).collect()
        }

        let actions = [
            (ActionType::Create, words(&["créer", "crée", "ajouter", "ajoute", "nouvelle", "nouveau", "rajouter"])),
            (ActionType::Edit, words(&["modifier", "modifie", "éditer", "changer", "renommer"])),
            (ActionType::Delete, words(&["supprimer", "supprime", "effacer", "retirer", "enlever"])),
            (ActionType::View, words(&["voir", "afficher", "affiche", "montrer", "ouvrir", "consulter"])),
            (ActionType::Send, words(&["envoyer", "envoie", "transmettre"])),
            (ActionType::Share, words(&["partager", "partage"])),
            (ActionType::Copy, words(&["copier", "copie", "dupliquer"])),
        ]
        .into_iter()
        .collect();

        let media = [
            (Medium::Cloud, words(&["cloud", "nuage", "drive"])),
            (Medium::Ocr, words(&["ocr", "photo", "scanner", "image"])),
            (Medium::Qr, words(&["qr", "qrcode", "code"])),
            (Medium::Nfc, words(&["nfc", "puce"])),
        ]
        .into_iter()
        .collect();

        Self {
            actions,
            media,
            list_nouns: words(&["liste", "listes", "ensemble"]),
            item_nouns: words(&["tâche", "tâches", "élément", "item", "todo"]),
        }
    }
}

/// Normalized, read-only keyword sets used by the interpreter
#[derive(Debug, Clone)]
pub struct KeywordTables {
    actions: Vec<(ActionType, AHashSet<String>)>,
    media: Vec<(Medium, AHashSet<String>)>,
    list_nouns: AHashSet<String>,
    item_nouns: AHashSet<String>,
}

impl KeywordTables {
    /// Built-in French vocabulary
    pub fn french() -> Self {
        // The built-in config has a synonym for every entry
        Self::build(KeywordConfig::default())
    }

    pub fn from_config(config: KeywordConfig) -> Result<Self, ConfigError> {
        let tables = Self::build(config);

        // Every action and medium needs at least one usable synonym, whether
        // its key is missing or its words all normalize away
        for action in ActionType::ALL {
            if !tables.actions.iter().any(|(a, set)| *a == action && !set.is_empty()) {
                return Err(ConfigError::EmptyTable(format!("action '{}'", action)));
            }
        }
        for medium in Medium::ALL {
            if !tables.media.iter().any(|(m, set)| *m == medium && !set.is_empty()) {
                return Err(ConfigError::EmptyTable(format!("medium '{}'", medium)));
            }
        }
        if tables.list_nouns.is_empty() {
            return Err(ConfigError::EmptyTable("list nouns".to_string()));
        }
        if tables.item_nouns.is_empty() {
            return Err(ConfigError::EmptyTable("item nouns".to_string()));
        }

        Ok(tables)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: KeywordConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading keyword tables from {}", path.display());
        Self::from_json(&json)
    }

    fn build(config: KeywordConfig) -> Self {
        Self {
            actions: config
                .actions
                .into_iter()
                .map(|(action, words)| (action, to_set(&words)))
                .collect(),
            media: config
                .media
                .into_iter()
                .map(|(medium, words)| (medium, to_set(&words)))
                .collect(),
            list_nouns: to_set(&config.list_nouns),
            item_nouns: to_set(&config.item_nouns),
        }
    }

    /// Action sets in priority order
    pub fn actions(&self) -> impl Iterator<Item = (ActionType, &AHashSet<String>)> {
        self.actions.iter().map(|(action, set)| (*action, set))
    }

    /// Medium sets in priority order
    pub fn media(&self) -> impl Iterator<Item = (Medium, &AHashSet<String>)> {
        self.media.iter().map(|(medium, set)| (*medium, set))
    }

    pub fn is_list_noun(&self, word: &str) -> bool {
        self.list_nouns.contains(&normalize_keyword(word))
    }

    pub fn is_item_noun(&self, word: &str) -> bool {
        self.item_nouns.contains(&normalize_keyword(word))
    }

    /// True when the word belongs to any table
    pub fn is_keyword(&self, word: &str) -> bool {
        let key = normalize_keyword(word);
        self.actions.iter().any(|(_, set)| set.contains(&key))
            || self.media.iter().any(|(_, set)| set.contains(&key))
            || self.list_nouns.contains(&key)
            || self.item_nouns.contains(&key)
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::french()
    }
}

fn to_set(words: &[String]) -> AHashSet<String> {
    words
        .iter()
        .map(|w| normalize_keyword(w))
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_tables_cover_every_entry() {
        let tables = KeywordTables::french();
        let actions: Vec<ActionType> = tables.actions().map(|(a, _)| a).collect();
        let media: Vec<Medium> = tables.media().map(|(m, _)| m).collect();

        assert_eq!(actions, ActionType::ALL.to_vec());
        assert_eq!(media, Medium::ALL.to_vec());
        assert!(KeywordTables::from_config(KeywordConfig::default()).is_ok());
    }

    #[test]
    fn test_synonyms_are_normalized() {
        let tables = KeywordTables::french();
        assert!(tables.is_keyword("Créer"));
        assert!(tables.is_keyword("creer"));
        assert!(tables.is_item_noun("tache"));
        assert!(tables.is_item_noun("Tâche"));
        assert!(tables.is_list_noun("liste"));
        assert!(!tables.is_keyword("pain"));
    }

    #[test]
    fn test_priority_ignores_json_key_order() {
        let json = r#"{
            "actions": {
                "copy": ["copier"],
                "view": ["voir"],
                "create": ["créer"],
                "share": ["partager"],
                "delete": ["supprimer"],
                "send": ["envoyer"],
                "edit": ["modifier"]
            },
            "media": {"nfc": ["nfc"], "qr": ["qr"], "cloud": ["cloud"], "ocr": ["ocr"]},
            "list_nouns": ["liste"],
            "item_nouns": ["tâche"]
        }"#;

        let tables = KeywordTables::from_json(json).unwrap();
        let actions: Vec<ActionType> = tables.actions().map(|(a, _)| a).collect();
        let media: Vec<Medium> = tables.media().map(|(m, _)| m).collect();
        assert_eq!(actions, ActionType::ALL.to_vec());
        assert_eq!(media, Medium::ALL.to_vec());
    }

    #[test]
    fn test_omitted_medium_rejected() {
        let json = r#"{
            "actions": {
                "create": ["créer"],
                "edit": ["modifier"],
                "delete": ["supprimer"],
                "view": ["voir"],
                "send": ["envoyer"],
                "share": ["partager"],
                "copy": ["copier"]
            },
            "media": {"cloud": ["cloud"], "ocr": ["ocr"], "qr": ["qr"]},
            "list_nouns": ["liste"],
            "item_nouns": ["tâche"]
        }"#;

        match KeywordTables::from_json(json) {
            Err(ConfigError::EmptyTable(name)) => assert!(name.contains("nfc")),
            other => panic!("Expected EmptyTable, got {:?}", other),
        }
    }

    #[test]
    fn test_omitted_actions_and_empty_media_rejected() {
        let json = r#"{
            "actions": {"create": ["créer"]},
            "media": {},
            "list_nouns": ["liste"],
            "item_nouns": ["tâche"]
        }"#;

        match KeywordTables::from_json(json) {
            Err(ConfigError::EmptyTable(name)) => assert!(name.contains("edit")),
            other => panic!("Expected EmptyTable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_synonym_set_rejected() {
        let json = r#"{
            "actions": {"create": ["123", "!!"]},
            "media": {},
            "list_nouns": ["liste"],
            "item_nouns": ["tâche"]
        }"#;

        match KeywordTables::from_json(json) {
            Err(ConfigError::EmptyTable(name)) => assert!(name.contains("create")),
            other => panic!("Expected EmptyTable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            KeywordTables::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = KeywordTables::from_path(Path::new("/nonexistent/keywords.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
