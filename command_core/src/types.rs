//! Core data types for interpreter input and results

use serde::{Deserialize, Serialize};
use std::fmt;

/// The recognized intent verb of a voice command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    Edit,
    Delete,
    View,
    Send,
    Share,
    Copy,
}

impl ActionType {
    /// All actions in match-priority order
    pub const ALL: [ActionType; 7] = [
        ActionType::Create,
        ActionType::Edit,
        ActionType::Delete,
        ActionType::View,
        ActionType::Send,
        ActionType::Share,
        ActionType::Copy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Create => "create",
            ActionType::Edit => "edit",
            ActionType::Delete => "delete",
            ActionType::View => "view",
            ActionType::Send => "send",
            ActionType::Share => "share",
            ActionType::Copy => "copy",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel named by a send/share/import command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medium {
    Cloud,
    Ocr,
    Qr,
    Nfc,
}

impl Medium {
    pub const ALL: [Medium; 4] = [Medium::Cloud, Medium::Ocr, Medium::Qr, Medium::Nfc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Cloud => "cloud",
            Medium::Ocr => "ocr",
            Medium::Qr => "qr",
            Medium::Nfc => "nfc",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action together with its optional medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub action: ActionType,
    pub medium: Option<Medium>,
}

impl Request {
    pub fn new(action: ActionType, medium: Option<Medium>) -> Self {
        Self { action, medium }
    }
}

/// A to-do list as held by the todo store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    pub name: String,
}

/// An item of a to-do list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub list_id: String,
    pub name: String,
    #[serde(default)]
    pub complete: bool,
}

/// A device contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TodoList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl TodoItem {
    pub fn new(id: impl Into<String>, list_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            name: name.into(),
            complete: false,
        }
    }
}

impl Contact {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            phone: None,
            email: None,
        }
    }
}

/// A recognized sentence split into words.
///
/// `tokens` are lower-cased; `raw_tokens` keep the original casing at the
/// same positions so extracted names can be returned as spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub sentence: String,
    pub tokens: Vec<String>,
    pub raw_tokens: Vec<String>,
}

impl Utterance {
    pub fn new(sentence: &str) -> Self {
        let raw_tokens: Vec<String> = sentence
            .trim()
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();
        let tokens = raw_tokens.iter().map(|word| word.to_lowercase()).collect();

        Self {
            sentence: sentence.to_string(),
            tokens,
            raw_tokens,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Structured result of one interpretation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub tokens: Vec<String>,
    pub sentence: String,
    pub item_found: Option<TodoItem>,
    pub list_found: Option<TodoList>,
    pub new_item_name: Option<String>,
    pub new_list_name: Option<String>,
    pub contact: Option<Contact>,
    pub request: Option<Request>,
}

impl ParsedCommand {
    pub fn new(utterance: &Utterance) -> Self {
        Self {
            tokens: utterance.tokens.clone(),
            sentence: utterance.sentence.clone(),
            ..Self::default()
        }
    }

    /// True when an action keyword was found
    pub fn is_recognized(&self) -> bool {
        self.request.is_some()
    }

    pub fn action(&self) -> Option<ActionType> {
        self.request.map(|r| r.action)
    }

    pub fn medium(&self) -> Option<Medium> {
        self.request.and_then(|r| r.medium)
    }

    /// True when any list, item, contact or new name was extracted
    pub fn has_entities(&self) -> bool {
        self.item_found.is_some()
            || self.list_found.is_some()
            || self.new_item_name.is_some()
            || self.new_list_name.is_some()
            || self.contact.is_some()
    }
}
