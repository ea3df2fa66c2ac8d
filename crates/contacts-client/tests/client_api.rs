use contacts_client::{ClientError, ContactsClient};
use contacts_server::http::{contact_routes, health_routes};
use contacts_server::service::AppState;
use contacts_store_adapters::MemoryStore;
use contacts_store_contract::ContactInput;
use std::future::IntoFuture;
use std::sync::Arc;

async fn spawn_server() -> ContactsClient {
    let app = axum::Router::new()
        .merge(health_routes())
        .merge(contact_routes())
        .with_state(AppState {
            store: Arc::new(MemoryStore::new()),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(axum::serve(listener, app).into_future());
    ContactsClient::new(format!("http://{addr}"))
}

fn input(name: &str, phone: &str, notes: Option<&str>) -> ContactInput {
    ContactInput {
        name: name.to_string(),
        phone: phone.to_string(),
        notes: notes.map(str::to_string),
    }
}

#[tokio::test]
async fn crud_lifecycle_over_the_wire() {
    let client = spawn_server().await;

    let created = client
        .create(&input("Courier", "+1 555-000-1111", Some("morning route")))
        .await
        .unwrap();
    assert_eq!(created.name, "Courier");
    assert_eq!(created.notes.as_deref(), Some("morning route"));
    assert_eq!(created.created_at, created.updated_at);

    let updated = client
        .update(&created.id, &input("Courier 2", "555 0002", None))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Courier 2");
    assert_eq!(updated.notes, None);

    let listed = client.list().await.unwrap();
    assert_eq!(listed, vec![updated]);

    client.delete(&created.id).await.unwrap();
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn not_found_surfaces_the_server_message() {
    let client = spawn_server().await;

    let err = client.delete("missing").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Contact not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_error_surfaces_the_server_message() {
    let client = spawn_server().await;

    let err = client.create(&input("", "123", None)).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Name is required");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
