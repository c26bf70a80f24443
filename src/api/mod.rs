use crate::models::{NewNote, Note, NoteListResponse};
use leptos::logging::{log, warn};
use serde::Serialize;

pub(crate) const DEFAULT_API_URL: &str = "https://notehub-public.goit.study/api";

/// Page size used by the notes list view.
pub(crate) const NOTES_PER_PAGE: u32 = 12;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ApiError {
    /// No response reached us (DNS, CORS, offline, aborted).
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Request failed ({status}): {body}")]
    Remote { status: u16, body: String },

    /// 2xx, but the body did not match the contract.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    fn transport(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }

    fn decode(e: impl std::fmt::Display) -> Self {
        Self::Decode(e.to_string())
    }

    fn remote(status: reqwest::StatusCode, body: String) -> Self {
        Self::Remote {
            status: status.as_u16(),
            body,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub token: Option<String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        let mut config = Self::from_build_env();

        // Runtime overrides: `window.ENV = { API_URL, NOTEHUB_TOKEN }` injected by index.html.
        // Lowercase keys are accepted as well.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    let read = |keys: &[&str]| {
                        keys.iter().find_map(|k| {
                            js_sys::Reflect::get(&env, &(*k).into())
                                .ok()
                                .and_then(|v| v.as_string())
                                .filter(|s| !s.trim().is_empty())
                        })
                    };

                    if let Some(url) = read(&["API_URL", "api_url"]) {
                        config.api_url = url;
                    }
                    if let Some(token) = read(&["NOTEHUB_TOKEN", "token"]) {
                        config.token = Some(token);
                    }
                }
            }
        }

        config
    }

    /// Values baked in at compile time (`NOTEHUB_API_URL`, `NOTEHUB_TOKEN`).
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("NOTEHUB_API_URL"), option_env!("NOTEHUB_TOKEN"))
    }

    pub(crate) fn from_values(api_url: Option<&str>, token: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let token = token
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self { api_url, token }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListNotesParams<'a> {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub search: &'a str,
}

/// Thin client for the NoteHub REST API.
///
/// Errors are returned as-is; nothing here retries.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone(), config.token.clone())
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    pub(crate) fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    pub(crate) fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, urlencoding::encode(id))
    }

    fn with_auth_headers(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(header) = self.auth_header() {
            req = req.header("Authorization", header);
        }
        req.header("Accept", "application/json")
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        ctx: &str,
    ) -> ApiResult<T> {
        log!("[api] {ctx}");

        let res = self
            .with_auth_headers(req)
            .send()
            .await
            .map_err(|e| {
                warn!("[api] {ctx}: network error: {e}");
                ApiError::transport(e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(ApiError::transport)?;

        if !status.is_success() {
            let err = ApiError::remote(status, body);
            if err.is_not_found() {
                log!("[api] {ctx}: not found");
            } else {
                warn!("[api] {ctx}: {status}");
            }
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("[api] {ctx}: undecodable body: {e}");
            ApiError::decode(e)
        })
    }

    pub async fn list_notes(
        &self,
        page: u32,
        per_page: u32,
        search: &str,
    ) -> ApiResult<NoteListResponse> {
        let params = ListNotesParams {
            page: page.max(1),
            per_page: per_page.max(1),
            search: search.trim(),
        };
        let req = reqwest::Client::new().get(self.notes_url()).query(&params);
        self.send(req, &format!("GET /notes page={}", params.page)).await
    }

    pub async fn get_note(&self, id: &str) -> ApiResult<Note> {
        let req = reqwest::Client::new().get(self.note_url(id));
        self.send(req, &format!("GET /notes/{id}")).await
    }

    pub async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        let req = reqwest::Client::new().post(self.notes_url()).json(note);
        self.send(req, "POST /notes").await
    }

    pub async fn delete_note(&self, id: &str) -> ApiResult<Note> {
        let req = reqwest::Client::new().delete(self.note_url(id));
        self.send(req, &format!("DELETE /notes/{id}")).await
    }
}
