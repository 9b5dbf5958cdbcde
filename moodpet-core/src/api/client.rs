//! HTTP implementation of [`PetApi`] backed by reqwest.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ApiError, PetApi};
use crate::models::{Achievement, ActionOutcome, MoodEntry, NewMood, Pet, PetAction, ShopItem};

/// Longest response body excerpt kept in [`ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

/// REST client for the MoodPet backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpClient {
    /// Creates a client for the given base URL (e.g. `http://localhost:8001/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    /// Sends a request and decodes a JSON body, classifying failures.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let body: String = String::from_utf8_lossy(&bytes)
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();
            tracing::debug!("Request failed with status {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn encode_id(id: &str) -> Result<String, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::InvalidInput("id cannot be empty".to_string()));
    }
    Ok(urlencoding::encode(id).into_owned())
}

fn require_name(name: &str) -> Result<&str, ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidInput("name cannot be empty".to_string()));
    }
    Ok(name)
}

impl PetApi for HttpClient {
    async fn list_pets(&self) -> Result<Vec<Pet>, ApiError> {
        self.send(self.request(Method::GET, "/pets")).await
    }

    async fn create_pet(&self, name: &str) -> Result<Pet, ApiError> {
        let name = require_name(name)?;
        self.send(self.request(Method::POST, "/pets").json(&NameBody { name }))
            .await
    }

    async fn get_pet(&self, id: &str) -> Result<Pet, ApiError> {
        let id = encode_id(id)?;
        self.send(self.request(Method::GET, &format!("/pets/{}", id)))
            .await
    }

    async fn update_pet(&self, id: &str, name: &str) -> Result<Pet, ApiError> {
        let id = encode_id(id)?;
        let name = require_name(name)?;
        self.send(
            self.request(Method::PUT, &format!("/pets/{}", id))
                .json(&NameBody { name }),
        )
        .await
    }

    async fn perform_action(
        &self,
        id: &str,
        action: PetAction,
    ) -> Result<ActionOutcome, ApiError> {
        let id = encode_id(id)?;
        self.send(self.request(Method::POST, &format!("/pets/{}/{}", id, action.path())))
            .await
    }

    async fn list_moods(&self, pet_id: &str) -> Result<Vec<MoodEntry>, ApiError> {
        let pet_id = encode_id(pet_id)?;
        self.send(self.request(Method::GET, &format!("/moods/{}", pet_id)))
            .await
    }

    async fn create_mood(&self, mood: &NewMood) -> Result<MoodEntry, ApiError> {
        encode_id(&mood.pet_id)?;
        self.send(self.request(Method::POST, "/moods").json(mood))
            .await
    }

    async fn list_achievements(&self, pet_id: &str) -> Result<Vec<Achievement>, ApiError> {
        let pet_id = encode_id(pet_id)?;
        self.send(self.request(Method::GET, &format!("/achievements/{}", pet_id)))
            .await
    }

    async fn list_shop(&self) -> Result<Vec<ShopItem>, ApiError> {
        self.send(self.request(Method::GET, "/shop")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Emotion, PetStage};
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type RequestLog = Arc<Mutex<Vec<String>>>;

    fn pet_json(id: &str, name: &str) -> Value {
        json!({
            "id": id, "name": name, "coins": 0, "happiness": 50,
            "health": 100, "experience": 0, "stage": "egg"
        })
    }

    fn mock_backend(log: RequestLog) -> Router {
        Router::new()
            .route(
                "/api/pets",
                get(|State(log): State<RequestLog>| async move {
                    log.lock().unwrap().push("GET /pets".to_string());
                    Json(json!([pet_json("p1", "MoodPet")]))
                })
                .post(
                    |State(log): State<RequestLog>, Json(body): Json<Value>| async move {
                        log.lock().unwrap().push(format!("POST /pets {}", body));
                        let id = uuid::Uuid::new_v4().to_string();
                        Json(pet_json(&id, body["name"].as_str().unwrap_or("")))
                    },
                ),
            )
            .route(
                "/api/pets/{id}",
                get(
                    |State(log): State<RequestLog>, Path(id): Path<String>| async move {
                        log.lock().unwrap().push(format!("GET /pets/{}", id));
                        if id == "missing" {
                            return Err((StatusCode::NOT_FOUND, "Pet not found"));
                        }
                        Ok(Json(pet_json(&id, "MoodPet")))
                    },
                )
                .put(
                    |State(log): State<RequestLog>,
                     Path(id): Path<String>,
                     Json(body): Json<Value>| async move {
                        log.lock().unwrap().push(format!("PUT /pets/{} {}", id, body));
                        Json(pet_json(&id, body["name"].as_str().unwrap_or("")))
                    },
                ),
            )
            .route(
                "/api/pets/{id}/{action}",
                post(
                    |State(log): State<RequestLog>,
                     Path((id, action)): Path<(String, String)>| async move {
                        log.lock()
                            .unwrap()
                            .push(format!("POST /pets/{}/{}", id, action));
                        let mut pet = pet_json(&id, "MoodPet");
                        pet["happiness"] = json!(60);
                        Json(json!({"pet": pet, "message": "Yum!"}))
                    },
                ),
            )
            .route(
                "/api/moods",
                post(
                    |State(log): State<RequestLog>, Json(body): Json<Value>| async move {
                        log.lock().unwrap().push(format!("POST /moods {}", body));
                        Json(json!({
                            "id": "m1",
                            "pet_id": body["pet_id"],
                            "emotion": body["emotion"],
                            "intensity": body["intensity"],
                            "note": null,
                            "timestamp": "2025-01-01T12:00:00+00:00"
                        }))
                    },
                ),
            )
            .route(
                "/api/moods/{pet_id}",
                get(|Path(pet_id): Path<String>| async move {
                    Json(json!([{
                        "id": "m1", "pet_id": pet_id, "emotion": "calm",
                        "intensity": 6, "timestamp": "2025-01-01T12:00:00Z"
                    }]))
                }),
            )
            .route(
                "/api/achievements/{pet_id}",
                get(|Path(pet_id): Path<String>| async move {
                    Json(json!([{
                        "id": "a1", "name": "First Steps", "description": "Create your first pet",
                        "icon": "🐣", "unlocked": false, "pet_id": pet_id
                    }]))
                }),
            )
            .route(
                "/api/shop",
                get(|| async {
                    Json(json!([{
                        "id": "s1", "name": "Premium Food", "description": "Increases happiness by 25",
                        "price": 50, "category": "food", "icon": "🍖"
                    }]))
                }),
            )
            .route("/api/broken", get(|| async { "not json" }))
            .with_state(log)
    }

    async fn spawn_backend() -> (HttpClient, RequestLog) {
        let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let app = mock_backend(log.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (HttpClient::new(format!("http://{}/api/", addr)), log)
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpClient::new("http://localhost:8001/api/");
        assert_eq!(client.base_url(), "http://localhost:8001/api");
        assert_eq!(client.url("/shop"), "http://localhost:8001/api/shop");
    }

    #[tokio::test]
    async fn test_list_and_create_pets() {
        let (client, log) = spawn_backend().await;

        let pets = client.list_pets().await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].stage, PetStage::Egg);

        let created = client.create_pet("  Biscuit ").await.unwrap();
        assert_eq!(created.name, "Biscuit");

        let log = log.lock().unwrap();
        assert_eq!(log[0], "GET /pets");
        assert_eq!(log[1], r#"POST /pets {"name":"Biscuit"}"#);
    }

    #[tokio::test]
    async fn test_perform_action_hits_action_route() {
        let (client, log) = spawn_backend().await;

        let outcome = client.perform_action("p1", PetAction::Train).await.unwrap();
        assert_eq!(outcome.pet.happiness, 60);
        assert_eq!(outcome.message, "Yum!");
        assert_eq!(log.lock().unwrap().as_slice(), ["POST /pets/p1/train"]);
    }

    #[tokio::test]
    async fn test_update_pet_sends_name() {
        let (client, log) = spawn_backend().await;

        let pet = client.update_pet("p1", "Rex").await.unwrap();
        assert_eq!(pet.name, "Rex");
        assert_eq!(
            log.lock().unwrap().as_slice(),
            [r#"PUT /pets/p1 {"name":"Rex"}"#]
        );
    }

    #[tokio::test]
    async fn test_create_mood_and_collections() {
        let (client, log) = spawn_backend().await;

        let mood = NewMood::new(Emotion::Happy, 8, "p1").unwrap();
        let created = client.create_mood(&mood).await.unwrap();
        assert_eq!(created.emotion, Emotion::Happy);
        assert_eq!(created.intensity, 8);
        assert_eq!(created.pet_id, "p1");

        let moods = client.list_moods("p1").await.unwrap();
        assert_eq!(moods[0].emotion, Emotion::Calm);
        let achievements = client.list_achievements("p1").await.unwrap();
        assert_eq!(achievements[0].name, "First Steps");
        let shop = client.list_shop().await.unwrap();
        assert_eq!(shop[0].price, 50);

        assert!(log.lock().unwrap()[0].starts_with("POST /moods"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_classified() {
        let (client, _log) = spawn_backend().await;

        let err = client.get_pet("missing").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                body: "Pet not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (client, _log) = spawn_backend().await;

        let request = client.request(Method::GET, "/broken");
        let err = client.send::<Vec<Pet>>(request).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new(format!("http://{}/api", addr));
        let err = client.list_shop().await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let (client, log) = spawn_backend().await;

        assert!(matches!(
            client.get_pet("").await,
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            client.update_pet("p1", "   ").await,
            Err(ApiError::InvalidInput(_))
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_encode_id_escapes_path_characters() {
        assert_eq!(encode_id("a/b").unwrap(), "a%2Fb");
    }
}
