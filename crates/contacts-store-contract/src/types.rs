use super::*;

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Opaque unique identifier, assigned at creation, immutable afterwards.
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Free-text notes. Omitted from JSON entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update.
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build a fresh record from a validated input: new UUID, both
    /// timestamps stamped to now.
    pub fn new(input: ContactInput) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            phone: input.phone,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the caller-editable fields and refresh `updated_at`.
    /// `id` and `created_at` are preserved.
    pub fn apply(&mut self, input: ContactInput) {
        self.name = input.name;
        self.phone = input.phone;
        self.notes = input.notes;
        self.updated_at = Utc::now();
    }
}

/// Caller-supplied subset of contact fields used for create and update.
///
/// Inputs are expected to arrive trimmed and validated from the API
/// boundary; the store copies them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum ContactStoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, phone: &str, notes: Option<&str>) -> ContactInput {
        ContactInput {
            name: name.to_string(),
            phone: phone.to_string(),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn new_contact_stamps_equal_timestamps() {
        let contact = Contact::new(input("Ada", "123", None));
        assert!(!contact.id.is_empty());
        assert_eq!(contact.created_at, contact.updated_at);
    }

    #[test]
    fn apply_preserves_id_and_created_at() {
        let mut contact = Contact::new(input("Ada", "123", None));
        let id = contact.id.clone();
        let created_at = contact.created_at;

        contact.apply(input("Grace", "456", Some("colleague")));

        assert_eq!(contact.id, id);
        assert_eq!(contact.created_at, created_at);
        assert_eq!(contact.name, "Grace");
        assert_eq!(contact.phone, "456");
        assert_eq!(contact.notes.as_deref(), Some("colleague"));
        assert!(contact.updated_at >= contact.created_at);
    }

    #[test]
    fn apply_can_clear_notes() {
        let mut contact = Contact::new(input("Ada", "123", Some("note")));
        contact.apply(input("Ada", "123", None));
        assert_eq!(contact.notes, None);
    }
}
