//! Interpreter context and the collaborators it is read from

use crate::error::ContextError;
use crate::types::{Contact, TodoItem, TodoList};
use serde::{Deserialize, Serialize};

/// In-memory view of the user's lists and items
pub trait TodoStore: Send + Sync {
    fn lists(&self) -> Vec<TodoList>;

    /// Items of one list, or every item when `list_id` is `None`
    fn items(&self, list_id: Option<&str>) -> Vec<TodoItem>;

    fn list_by_id(&self, id: &str) -> Option<TodoList>;

    fn item_by_id(&self, id: &str) -> Option<TodoItem>;
}

/// Device address book
#[async_trait::async_trait]
pub trait ContactProvider: Send + Sync {
    async fn contacts(&self) -> Result<Vec<Contact>, ContextError>;
}

/// Which list and item the user is currently looking at
pub trait NavigationState: Send + Sync {
    fn active_list_id(&self) -> Option<String>;

    fn active_item_id(&self) -> Option<String>;
}

/// Snapshot of everything the interpreter matches against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub active_list: Option<TodoList>,
    pub active_item: Option<TodoItem>,
    pub lists: Vec<TodoList>,
    pub items: Vec<TodoItem>,
    pub contacts: Vec<Contact>,
}

impl Context {
    /// Read a fresh snapshot.
    ///
    /// Lists and items are read synchronously; only the contact lookup is
    /// awaited. Reads are not atomic with respect to concurrent store writes.
    pub async fn fetch(
        store: &dyn TodoStore,
        contacts: &dyn ContactProvider,
        navigation: &dyn NavigationState,
    ) -> Result<Self, ContextError> {
        let active_list = navigation
            .active_list_id()
            .and_then(|id| store.list_by_id(&id));
        let active_item = navigation
            .active_item_id()
            .and_then(|id| store.item_by_id(&id));

        let lists = store.lists();
        let items = store.items(active_list.as_ref().map(|list| list.id.as_str()));

        let contacts = contacts.contacts().await.map_err(|e| {
            tracing::warn!("Failed to fetch contacts: {}", e);
            e
        })?;

        Ok(Self {
            active_list,
            active_item,
            lists,
            items,
            contacts,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Fixed lists and items
    pub struct StubStore {
        pub lists: Vec<TodoList>,
        pub items: Vec<TodoItem>,
    }

    impl TodoStore for StubStore {
        fn lists(&self) -> Vec<TodoList> {
            self.lists.clone()
        }

        fn items(&self, list_id: Option<&str>) -> Vec<TodoItem> {
            self.items
                .iter()
                .filter(|item| list_id.map_or(true, |id| item.list_id == id))
                .cloned()
                .collect()
        }

        fn list_by_id(&self, id: &str) -> Option<TodoList> {
            self.lists.iter().find(|list| list.id == id).cloned()
        }

        fn item_by_id(&self, id: &str) -> Option<TodoItem> {
            self.items.iter().find(|item| item.id == id).cloned()
        }
    }

    /// Contacts that can be swapped between calls
    pub struct StubContacts {
        pub contacts: Mutex<Vec<Contact>>,
    }

    impl StubContacts {
        pub fn new(contacts: Vec<Contact>) -> Self {
            Self {
                contacts: Mutex::new(contacts),
            }
        }
    }

    #[async_trait::async_trait]
    impl ContactProvider for StubContacts {
        async fn contacts(&self) -> Result<Vec<Contact>, ContextError> {
            Ok(self.contacts.lock().unwrap().clone())
        }
    }

    /// Contact provider that always rejects
    pub struct DeniedContacts;

    #[async_trait::async_trait]
    impl ContactProvider for DeniedContacts {
        async fn contacts(&self) -> Result<Vec<Contact>, ContextError> {
            Err(ContextError::Contacts("permission denied".into()))
        }
    }

    pub struct StubNavigation {
        pub list: Option<String>,
        pub item: Option<String>,
    }

    impl NavigationState for StubNavigation {
        fn active_list_id(&self) -> Option<String> {
            self.list.clone()
        }

        fn active_item_id(&self) -> Option<String> {
            self.item.clone()
        }
    }

    pub fn sample_store() -> StubStore {
        StubStore {
            lists: vec![
                TodoList::new("l1", "Courses"),
                TodoList::new("l2", "Devoirs"),
            ],
            items: vec![
                TodoItem::new("i1", "l1", "Acheter du pain"),
                TodoItem::new("i2", "l1", "Lait"),
                TodoItem::new("i3", "l2", "Exercice de maths"),
            ],
        }
    }

    #[tokio::test]
    async fn test_fetch_scopes_items_to_active_list() {
        let store = sample_store();
        let contacts = StubContacts::new(vec![Contact::new("c1", "Marie Dupont")]);
        let navigation = StubNavigation {
            list: Some("l2".into()),
            item: Some("i3".into()),
        };

        let context = Context::fetch(&store, &contacts, &navigation).await.unwrap();

        assert_eq!(context.active_list.map(|l| l.id), Some("l2".to_string()));
        assert_eq!(context.active_item.map(|i| i.id), Some("i3".to_string()));
        assert_eq!(context.lists.len(), 2);
        assert_eq!(context.items.len(), 1);
        assert_eq!(context.contacts.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_without_active_list_reads_all_items() {
        let store = sample_store();
        let contacts = StubContacts::new(Vec::new());
        let navigation = StubNavigation { list: None, item: None };

        let context = Context::fetch(&store, &contacts, &navigation).await.unwrap();

        assert!(context.active_list.is_none());
        assert!(context.active_item.is_none());
        assert_eq!(context.items.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_ignores_stale_ids() {
        let store = sample_store();
        let contacts = StubContacts::new(Vec::new());
        let navigation = StubNavigation {
            list: Some("deleted".into()),
            item: Some("gone".into()),
        };

        let context = Context::fetch(&store, &contacts, &navigation).await.unwrap();

        assert!(context.active_list.is_none());
        assert!(context.active_item.is_none());
        assert_eq!(context.items.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_propagates_contact_failure() {
        let store = sample_store();
        let navigation = StubNavigation { list: None, item: None };

        let result = Context::fetch(&store, &DeniedContacts, &navigation).await;
        assert_eq!(result, Err(ContextError::Contacts("permission denied".into())));
    }
}
