use contacts_store_contract::{Contact, ContactInput};
use serde_json::{json, Value};

#[test]
fn contact_serializes_camel_case() {
    let contact = Contact::new(ContactInput {
        name: "Ada".to_string(),
        phone: "+1 555".to_string(),
        notes: Some("met at conf".to_string()),
    });

    let value = serde_json::to_value(&contact).unwrap();
    let obj = value.as_object().unwrap();
    assert!(obj.contains_key("id"));
    assert!(obj.contains_key("createdAt"));
    assert!(obj.contains_key("updatedAt"));
    assert_eq!(obj["name"], json!("Ada"));
    assert_eq!(obj["phone"], json!("+1 555"));
    assert_eq!(obj["notes"], json!("met at conf"));
}

#[test]
fn absent_notes_is_omitted_not_null() {
    let contact = Contact::new(ContactInput {
        name: "Ada".to_string(),
        phone: "555".to_string(),
        notes: None,
    });

    let value = serde_json::to_value(&contact).unwrap();
    assert!(value.get("notes").is_none());
}

#[test]
fn contact_round_trips_through_file_format() {
    let raw = json!({
        "id": "b7b1c2a0-0000-4000-8000-000000000000",
        "name": "Grace",
        "phone": "555-0001",
        "createdAt": "2026-01-02T03:04:05Z",
        "updatedAt": "2026-01-02T03:04:06Z"
    });

    let contact: Contact = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(contact.name, "Grace");
    assert_eq!(contact.notes, None);
    assert!(contact.updated_at > contact.created_at);

    let back: Value = serde_json::to_value(&contact).unwrap();
    assert_eq!(back["id"], raw["id"]);
    assert_eq!(back["phone"], raw["phone"]);
}

#[test]
fn input_accepts_missing_notes() {
    let input: ContactInput =
        serde_json::from_value(json!({ "name": "Ada", "phone": "555" })).unwrap();
    assert_eq!(input.notes, None);
}
