//! Action matcher - whole-token keyword lookup of the command verb and medium

use crate::keywords::KeywordTables;
use crate::normalize::normalize_keyword;
use crate::types::{ActionType, Medium, Request};
use ahash::AHashSet;

/// Find the action named in `tokens`.
///
/// Tables are walked in priority order and the first table with any token in
/// it wins, so "supprimer puis créer" is a create.
pub fn detect_action(tokens: &[String], tables: &KeywordTables) -> Option<ActionType> {
    let keys = keyword_forms(tokens);
    tables
        .actions()
        .find(|(_, synonyms)| any_member(&keys, synonyms))
        .map(|(action, _)| action)
}

/// Find the medium named in `tokens`, independently of the action
pub fn detect_medium(tokens: &[String], tables: &KeywordTables) -> Option<Medium> {
    let keys = keyword_forms(tokens);
    tables
        .media()
        .find(|(_, synonyms)| any_member(&keys, synonyms))
        .map(|(medium, _)| medium)
}

/// Combine action and medium. Without an action there is no request.
pub fn detect_request(tokens: &[String], tables: &KeywordTables) -> Option<Request> {
    let medium = detect_medium(tokens, tables);
    detect_action(tokens, tables).map(|action| Request::new(action, medium))
}

fn keyword_forms(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| normalize_keyword(t)).collect()
}

fn any_member(keys: &[String], synonyms: &AHashSet<String>) -> bool {
    keys.iter().any(|key| !key.is_empty() && synonyms.contains(key))
}
