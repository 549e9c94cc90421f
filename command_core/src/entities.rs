//! Entity extraction from a recognized utterance
//!
//! Finds the contact, item and list a sentence refers to, and pulls out the
//! name of a list or item the user wants to create.

use crate::context::Context;
use crate::keywords::KeywordTables;
use crate::normalize::contains_normalized;
use crate::types::{Contact, TodoItem, TodoList, Utterance};
use std::sync::Arc;

/// Shorter first words are taken to be articles ("la", "le", "des")
const ARTICLE_MAX_LEN: usize = 4;

/// Tokens appended after the first content word
const EXTRA_NAME_WORDS: usize = 2;

/// Which kind of new entity a name is extracted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Item,
}

impl NameKind {
    /// Literal that replaces a leading article
    pub fn prefix(&self) -> &'static str {
        match self {
            NameKind::List => "liste ",
            NameKind::Item => "tâche ",
        }
    }
}

/// Matches context entities and extracts new names
pub struct EntityExtractor {
    tables: Arc<KeywordTables>,
}

impl EntityExtractor {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self { tables }
    }

    /// Tables used for both keyword detection and name extraction
    pub fn tables(&self) -> &Arc<KeywordTables> {
        &self.tables
    }

    /// First contact whose display name occurs in the sentence
    pub fn match_contact<'a>(&self, sentence: &str, contacts: &'a [Contact]) -> Option<&'a Contact> {
        contacts
            .iter()
            .find(|contact| contains_normalized(sentence, &contact.display_name))
    }

    /// The active item if named in the sentence, else the first named item
    pub fn match_item<'a>(&self, sentence: &str, context: &'a Context) -> Option<&'a TodoItem> {
        context
            .active_item
            .iter()
            .chain(context.items.iter())
            .find(|item| contains_normalized(sentence, &item.name))
    }

    /// The active list if named in the sentence, else the first named list
    pub fn match_list<'a>(&self, sentence: &str, context: &'a Context) -> Option<&'a TodoList> {
        context
            .active_list
            .iter()
            .chain(context.lists.iter())
            .find(|list| contains_normalized(sentence, &list.name))
    }

    /// Name following the first list noun, if any
    pub fn extract_new_list_name(&self, utterance: &Utterance) -> Option<String> {
        self.extract_name(utterance, NameKind::List)
    }

    /// Name following the first item noun, if any
    pub fn extract_new_item_name(&self, utterance: &Utterance) -> Option<String> {
        self.extract_name(utterance, NameKind::Item)
    }

    /// Three steps: locate the trigger noun, slice from it, build the name.
    ///
    /// Nothing is extracted when the trigger is the last token.
    pub fn extract_name(&self, utterance: &Utterance, kind: NameKind) -> Option<String> {
        let trigger = utterance.tokens.iter().position(|token| match kind {
            NameKind::List => self.tables.is_list_noun(token),
            NameKind::Item => self.tables.is_item_noun(token),
        })?;

        let rest = &utterance.raw_tokens[trigger..];
        match rest.len() {
            0 | 1 => None,
            2 => Some(rest[1].clone()),
            _ => self.build_name(&rest[1..], kind),
        }
    }

    fn build_name(&self, words: &[String], kind: NameKind) -> Option<String> {
        let first = &words[0];
        let mut name = if first.chars().count() < ARTICLE_MAX_LEN {
            kind.prefix().to_string()
        } else {
            format!("{} ", first)
        };

        for word in words.iter().skip(1).take(EXTRA_NAME_WORDS) {
            if self.tables.is_keyword(word) {
                continue;
            }
            name.push_str(word);
            name.push(' ');
        }

        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new(crate::keywords::default_tables())
    }
}
