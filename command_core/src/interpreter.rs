//! Command interpreter - turns a recognized sentence into a `ParsedCommand`

use crate::context::{ContactProvider, Context, NavigationState, TodoStore};
use crate::entities::EntityExtractor;
use crate::error::ContextError;
use crate::keywords::KeywordTables;
use crate::matcher::detect_request;
use crate::types::{ParsedCommand, Utterance};
use std::sync::Arc;

/// Interprets voice commands against the live state of the app.
///
/// Holds no state between calls other than the shared keyword tables, so one
/// instance can serve concurrent callers.
pub struct CommandInterpreter {
    extractor: EntityExtractor,
    store: Arc<dyn TodoStore>,
    contacts: Arc<dyn ContactProvider>,
    navigation: Arc<dyn NavigationState>,
}

impl CommandInterpreter {
    pub fn new(
        tables: Arc<KeywordTables>,
        store: Arc<dyn TodoStore>,
        contacts: Arc<dyn ContactProvider>,
        navigation: Arc<dyn NavigationState>,
    ) -> Self {
        Self {
            extractor: EntityExtractor::new(tables),
            store,
            contacts,
            navigation,
        }
    }

    pub fn tables(&self) -> &Arc<KeywordTables> {
        self.extractor.tables()
    }

    /// Read a fresh context from the collaborators
    pub async fn fetch_context(&self) -> Result<Context, ContextError> {
        Context::fetch(
            self.store.as_ref(),
            self.contacts.as_ref(),
            self.navigation.as_ref(),
        )
        .await
    }

    /// Refresh context, then classify `sentence`.
    ///
    /// Only the context fetch can fail; classification itself always
    /// produces a command, possibly with every field empty.
    pub async fn parse(&self, sentence: &str) -> Result<ParsedCommand, ContextError> {
        let context = self.fetch_context().await?;
        Ok(interpret(&self.extractor, &context, sentence))
    }

    /// Classify `sentence` against an already fetched context
    pub fn parse_with_context(&self, context: &Context, sentence: &str) -> ParsedCommand {
        interpret(&self.extractor, context, sentence)
    }
}

/// Run every matching pass over one sentence.
///
/// Keyword detection and name extraction share the extractor's tables.
pub fn interpret(extractor: &EntityExtractor, context: &Context, sentence: &str) -> ParsedCommand {
    let utterance = Utterance::new(sentence);
    let mut command = ParsedCommand::new(&utterance);

    command.request = detect_request(&utterance.tokens, extractor.tables());
    command.contact = extractor.match_contact(sentence, &context.contacts).cloned();
    command.item_found = extractor.match_item(sentence, context).cloned();
    command.list_found = extractor.match_list(sentence, context).cloned();

    if command.list_found.is_none() {
        command.new_list_name = extractor.extract_new_list_name(&utterance);
    }
    if command.item_found.is_none() {
        command.new_item_name = extractor.extract_new_item_name(&utterance);
    }

    tracing::debug!(
        tokens = utterance.len(),
        action = ?command.action(),
        medium = ?command.medium(),
        list = ?command.list_found.as_ref().map(|l| &l.id),
        item = ?command.item_found.as_ref().map(|i| &i.id),
        contact = ?command.contact.as_ref().map(|c| &c.id),
        "Interpreted voice command"
    );
    tracing::trace!(
        new_list = ?command.new_list_name,
        new_item = ?command.new_item_name,
        "Extracted names"
    );

    command
}
