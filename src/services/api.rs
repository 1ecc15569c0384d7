use reqwasm::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PageConfig;
use crate::models::Avatar;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("could not decode response: {0}")]
    Decode(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRequest {
    avatar_pk: u64,
}

/// Body the avatar views send back, e.g. `{"status": 405, "message": "Authentication required"}`.
#[derive(Debug, Deserialize)]
struct StatusBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AvatarApi {
    config: PageConfig,
}

impl AvatarApi {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub async fn fetch_my_avatars(&self) -> Result<Vec<Avatar>, ApiError> {
        let url = self.config.endpoints.my_avatars_url(self.config.profile_id);
        self.get_avatars(&url).await
    }

    pub async fn fetch_preset_avatars(&self) -> Result<Vec<Avatar>, ApiError> {
        let url = self.config.endpoints.preset_avatars_url();
        self.get_avatars(&url).await
    }

    pub async fn activate(&self, avatar_pk: u64) -> Result<(), ApiError> {
        self.post_selection(&self.config.endpoints.activate, avatar_pk)
            .await
    }

    pub async fn select_preset(&self, avatar_pk: u64) -> Result<(), ApiError> {
        self.post_selection(&self.config.endpoints.select_preset, avatar_pk)
            .await
    }

    async fn get_avatars(&self, url: &str) -> Result<Vec<Avatar>, ApiError> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = ensure_ok(response).await?;
        response
            .json::<Vec<Avatar>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_selection(&self, url: &str, avatar_pk: u64) -> Result<(), ApiError> {
        let body = serde_json::to_string(&SelectionRequest { avatar_pk })
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        log::debug!("POST {} {}", url, body);
        let response = Request::post(url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("X-CSRFToken", &self.config.csrf_token)
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response).await.map(|_| ())
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(text) => server_message(&text),
        Err(_) => None,
    };
    Err(ApiError::Status { status, message })
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<StatusBody>(body)
        .ok()
        .and_then(|b| b.message)
}
