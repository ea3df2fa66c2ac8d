use super::*;

/// Read operations for contact persistence.
#[async_trait]
pub trait ContactReader: Send + Sync {
    /// List all contacts in insertion order, most recent first.
    async fn list(&self) -> Result<Vec<Contact>, ContactStoreError>;
}

/// Write operations for contact persistence.
#[async_trait]
pub trait ContactWriter: ContactReader {
    /// Create a new contact from a validated input and return the stored
    /// record with its generated id and timestamps.
    async fn create(&self, input: ContactInput) -> Result<Contact, ContactStoreError>;

    /// Replace the editable fields of an existing contact.
    ///
    /// Returns `None` when no contact has the given id; the store is left
    /// untouched in that case.
    async fn update(
        &self,
        id: &str,
        input: ContactInput,
    ) -> Result<Option<Contact>, ContactStoreError>;

    /// Delete a contact. Returns whether a record was actually removed.
    async fn remove(&self, id: &str) -> Result<bool, ContactStoreError>;
}

/// Full contact store capability (read + write).
pub trait ContactStore: ContactWriter {}

impl<T: ContactWriter + ?Sized> ContactStore for T {}
