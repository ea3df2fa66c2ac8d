use async_trait::async_trait;
use contacts_store_contract::{
    Contact, ContactInput, ContactReader, ContactStoreError, ContactWriter,
};

/// In-memory store for testing and local development.
#[derive(Default)]
pub struct MemoryStore {
    contacts: tokio::sync::RwLock<Vec<Contact>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactReader for MemoryStore {
    async fn list(&self) -> Result<Vec<Contact>, ContactStoreError> {
        Ok(self.contacts.read().await.clone())
    }
}

#[async_trait]
impl ContactWriter for MemoryStore {
    async fn create(&self, input: ContactInput) -> Result<Contact, ContactStoreError> {
        let contact = Contact::new(input);
        let mut contacts = self.contacts.write().await;
        contacts.insert(0, contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        id: &str,
        input: ContactInput,
    ) -> Result<Option<Contact>, ContactStoreError> {
        let mut contacts = self.contacts.write().await;
        let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        existing.apply(input);
        Ok(Some(existing.clone()))
    }

    async fn remove(&self, id: &str) -> Result<bool, ContactStoreError> {
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() != before)
    }
}
