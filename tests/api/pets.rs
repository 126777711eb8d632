use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn create_then_get_returns_the_stored_pet() {
    let app = spawn_app().await;

    let response = app
        .create_pet(&json!({ "name": "Rex", "species": "dog", "age": 3 }))
        .await;
    assert_eq!(response.status(), 201);

    let created: serde_json::Value = response.json().await.expect("json body");
    let pet_id = created["_id"]["$oid"].as_str().expect("store-assigned id");

    let response = app.get_pet(pet_id).await;
    assert_eq!(response.status(), 200);

    let fetched: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(fetched["name"], "Rex");
    assert_eq!(fetched["species"], "dog");
    assert_eq!(fetched["age"], 3);
    assert_eq!(fetched["_id"], created["_id"]);
}

#[tokio::test]
async fn malformed_json_is_rejected_before_the_store() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(format!("{}/pets", app.address))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("request sent");

    assert!(response.status().is_client_error());
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn missing_fields_are_rejected_before_the_store() {
    let app = spawn_app().await;

    let response = app.create_pet(&json!({ "name": "Rex" })).await;

    assert!(response.status().is_client_error());
    assert_eq!(app.store.len(), 0);
}

#[tokio::test]
async fn garbage_pet_id_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app.get_pet("not-an-object-id").await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn unknown_pet_id_is_not_found() {
    let app = spawn_app().await;

    let response = app.get_pet(&ObjectId::new().to_hex()).await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .create_pet(&json!({ "name": "Whiskers", "species": "cat", "age": null }))
        .await;
    let created: serde_json::Value = response.json().await.expect("json body");
    let pet_id = created["_id"]["$oid"].as_str().expect("store-assigned id");

    let response = app.delete_pet(pet_id).await;
    assert_eq!(response.status(), 204);

    let response = app.get_pet(pet_id).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn deleting_an_unknown_pet_is_not_found() {
    let app = spawn_app().await;

    let response = app.delete_pet(&ObjectId::new().to_hex()).await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn replace_overwrites_the_stored_fields() {
    let app = spawn_app().await;

    let response = app
        .create_pet(&json!({ "name": "Rex", "species": "dog", "age": 3 }))
        .await;
    let created: serde_json::Value = response.json().await.expect("json body");
    let pet_id = created["_id"]["$oid"].as_str().expect("store-assigned id");

    let response = app
        .replace_pet(pet_id, &json!({ "name": "Rexy", "species": "dog", "age": 4 }))
        .await;
    assert_eq!(response.status(), 200);

    let replaced: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(replaced["name"], "Rexy");
    assert_eq!(replaced["age"], 4);
    assert_eq!(replaced["_id"], created["_id"]);
}

#[tokio::test]
async fn replacing_an_unknown_pet_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .replace_pet(
            &ObjectId::new().to_hex(),
            &json!({ "name": "Rex", "species": "dog", "age": 3 }),
        )
        .await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn list_returns_every_created_pet() {
    let app = spawn_app().await;

    app.create_pet(&json!({ "name": "Rex", "species": "dog", "age": 3 }))
        .await;
    app.create_pet(&json!({ "name": "Whiskers", "species": "cat", "age": 7 }))
        .await;

    let response = app.list_pets().await;
    assert_eq!(response.status(), 200);

    let pets: Vec<serde_json::Value> = response.json().await.expect("json body");
    assert_eq!(pets.len(), 2);
}
