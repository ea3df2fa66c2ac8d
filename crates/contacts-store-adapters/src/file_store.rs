use async_trait::async_trait;
use contacts_store_contract::{
    Contact, ContactInput, ContactReader, ContactStoreError, ContactWriter,
};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

const CONTACTS_FILE: &str = "contacts.json";

/// File-backed contact store.
///
/// The in-memory list is the source of truth; `<data_dir>/contacts.json`
/// holds the durable mirror as a single pretty-printed JSON array,
/// rewritten in full on every mutation. After any successful mutating call
/// returns, memory and disk agree.
pub struct FileStore {
    data_dir: PathBuf,
    // `None` until the backing file has been read once. Initialization and
    // every mutation run under the write lock, so first use happens exactly
    // once and read-modify-write sequences never interleave.
    contacts: RwLock<Option<Vec<Contact>>>,
}

impl FileStore {
    /// Create a store over the given data directory. Nothing is touched on
    /// disk until the first operation.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            contacts: RwLock::new(None),
        }
    }

    fn contacts_path(&self) -> PathBuf {
        self.data_dir.join(CONTACTS_FILE)
    }

    /// Ensure the slot holds the decoded backing file, loading it on first
    /// use.
    ///
    /// Creates the data directory and an empty `[]` file when absent. A
    /// file that exists but cannot be read or parsed is an error, not an
    /// empty list: resetting would silently drop data.
    async fn init_slot<'a>(
        &self,
        slot: &'a mut Option<Vec<Contact>>,
    ) -> Result<&'a mut Vec<Contact>, ContactStoreError> {
        match slot {
            Some(contacts) => Ok(contacts),
            None => {
                tokio::fs::create_dir_all(&self.data_dir).await?;
                let path = self.contacts_path();
                let contacts: Vec<Contact> = match tokio::fs::read_to_string(&path).await {
                    Ok(raw) => serde_json::from_str(&raw)
                        .map_err(|e| ContactStoreError::Serialization(e.to_string()))?,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        tokio::fs::write(&path, "[]").await?;
                        Vec::new()
                    }
                    Err(e) => return Err(e.into()),
                };
                tracing::debug!(
                    path = %path.display(),
                    count = contacts.len(),
                    "contact store initialized"
                );
                Ok(slot.insert(contacts))
            }
        }
    }

    /// Serialize the full list and atomically replace the backing file
    /// (write to a temp file, fsync, rename).
    async fn persist(&self, contacts: &[Contact]) -> Result<(), ContactStoreError> {
        let content = serde_json::to_string_pretty(contacts)
            .map_err(|e| ContactStoreError::Serialization(e.to_string()))?;
        let path = self.contacts_path();
        let tmp_path = self.data_dir.join(format!(
            ".{}.{}.tmp",
            CONTACTS_FILE,
            uuid::Uuid::new_v4().simple()
        ));

        let write_result = async {
            let mut file = tokio::fs::File::create(&tmp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
            file.sync_all().await?;
            drop(file);
            match tokio::fs::rename(&tmp_path, &path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    tokio::fs::remove_file(&path).await?;
                    tokio::fs::rename(&tmp_path, &path).await?;
                }
                Err(e) => return Err(e),
            }
            Ok::<(), std::io::Error>(())
        }
        .await;

        if let Err(e) = write_result {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            tracing::warn!(error = %e, "contact store persist failed; memory is ahead of disk");
            return Err(ContactStoreError::Io(e));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactReader for FileStore {
    async fn list(&self) -> Result<Vec<Contact>, ContactStoreError> {
        {
            let guard = self.contacts.read().await;
            if let Some(contacts) = guard.as_ref() {
                return Ok(contacts.clone());
            }
        }
        let mut guard = self.contacts.write().await;
        let contacts = self.init_slot(&mut guard).await?;
        Ok(contacts.clone())
    }
}

#[async_trait]
impl ContactWriter for FileStore {
    async fn create(&self, input: ContactInput) -> Result<Contact, ContactStoreError> {
        let mut guard = self.contacts.write().await;
        let contacts = self.init_slot(&mut guard).await?;
        let contact = Contact::new(input);
        contacts.insert(0, contact.clone());
        self.persist(contacts).await?;
        Ok(contact)
    }

    async fn update(
        &self,
        id: &str,
        input: ContactInput,
    ) -> Result<Option<Contact>, ContactStoreError> {
        let mut guard = self.contacts.write().await;
        let contacts = self.init_slot(&mut guard).await?;
        let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        existing.apply(input);
        let updated = existing.clone();
        self.persist(contacts).await?;
        Ok(Some(updated))
    }

    async fn remove(&self, id: &str) -> Result<bool, ContactStoreError> {
        let mut guard = self.contacts.write().await;
        let contacts = self.init_slot(&mut guard).await?;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        if contacts.len() == before {
            return Ok(false);
        }
        self.persist(contacts).await?;
        Ok(true)
    }
}
