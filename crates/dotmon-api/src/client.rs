// Dotcom-Monitor HTTP client
//
// Wraps `reqwest::Client` with base-URL construction, session cookie
// handling, and response decoding. Endpoint groups (tasks, devices, etc.)
// are implemented as inherent methods in separate files to keep this
// module focused on transport mechanics.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::error::Error;
use crate::models::{CreateResponseBlock, Identified, ResponseBlock};
use crate::transport::TransportConfig;

/// Production endpoint of the configuration API.
pub const DEFAULT_BASE_URL: &str = "https://api.dotcom-monitor.com/config_api_v1";

/// Name of the session cookie set by `POST /login`.
pub const AUTH_COOKIE_NAME: &str = ".ASPXFORMSAUTH";

const BODY_PREVIEW_LEN: usize = 200;

#[derive(Default)]
struct Session {
    /// Kept after login so an expired session can be renewed.
    uid: Option<SecretString>,
    cookie: Option<SecretString>,
    logged_in: bool,
}

/// Raw HTTP client for the Dotcom-Monitor configuration API.
///
/// Every call except `login` requires an established session. A `401`
/// triggers one transparent re-login with the remembered UID before the
/// request is replayed; any other non-success status closes the session.
///
/// A `200` with an empty body is how the API answers lookups for
/// entities that do not exist, so `get`-style helpers return `Option`.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    session: RwLock<Session>,
}

impl Client {
    /// Create a new client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client for the production API with default transport settings.
    pub fn production() -> Result<Self, Error> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Self::new(base_url, &TransportConfig::default())
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            session: RwLock::new(Session::default()),
        }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a session is currently established.
    pub fn is_logged_in(&self) -> bool {
        self.session_read().logged_in
    }

    // ── Session state ────────────────────────────────────────────────

    fn session_read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn session_write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn remembered_uid(&self) -> Option<SecretString> {
        self.session_read().uid.clone()
    }

    pub(crate) fn open_session(&self, uid: SecretString) {
        let mut session = self.session_write();
        session.uid = Some(uid);
        session.logged_in = true;
    }

    /// Drop the cookie but keep the UID, so the next call logs in again.
    pub(crate) fn invalidate_session(&self) {
        let mut session = self.session_write();
        session.cookie = None;
        session.logged_in = false;
    }

    /// Forget the whole session, UID included.
    pub(crate) fn close_session(&self) {
        *self.session_write() = Session::default();
    }

    fn capture_cookie(&self, resp: &reqwest::Response) {
        if let Some(cookie) = resp.cookies().find(|c| c.name() == AUTH_COOKIE_NAME) {
            trace!("session cookie refreshed");
            self.session_write().cookie = Some(SecretString::from(cookie.value().to_owned()));
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/{path}`.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send one request with the session cookie attached and capture any
    /// rotated cookie from the response. No status handling.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response, Error> {
        let cookie = self
            .session_read()
            .cookie
            .as_ref()
            .map(|c| format!("{AUTH_COOKIE_NAME}={}", c.expose_secret()));

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(Error::Transport)?;
        self.capture_cookie(&resp);
        Ok(resp)
    }

    /// Send a GET request and decode the body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        self.execute(Method::GET, path, None).await
    }

    /// Send a PUT request with JSON body (the API's "create" verb).
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<Option<T>, Error> {
        let bytes = serde_json::to_vec(body)?;
        self.execute(Method::PUT, path, Some(bytes)).await
    }

    /// Send a POST request with JSON body (the API's "update" verb).
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<Option<T>, Error> {
        let bytes = serde_json::to_vec(body)?;
        self.execute(Method::POST, path, Some(bytes)).await
    }

    /// Send a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Option<T>, Error> {
        if !self.is_logged_in() {
            self.renew_session().await?;
        }

        let url = self.endpoint(path)?;
        debug!("{method} {url}");

        let resp = self.send(method.clone(), url.clone(), body.clone()).await?;
        let resp = if resp.status() == StatusCode::UNAUTHORIZED {
            warn!(%url, "session rejected (HTTP 401), logging in again");
            self.invalidate_session();
            self.renew_session().await?;
            self.send(method, url, body).await?
        } else {
            resp
        };

        self.decode(resp).await
    }

    async fn renew_session(&self) -> Result<(), Error> {
        let uid = self.remembered_uid().ok_or(Error::NotLoggedIn)?;
        self.login(&uid).await
    }

    async fn decode<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<Option<T>, Error> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
            return Err(Error::Authentication {
                message: "session expired or invalid UID (HTTP 401)".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            self.invalidate_session();
            return Err(Error::Api {
                status: status.as_u16(),
                message: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        parse_body(&body)
    }

    // ── Entity helpers ───────────────────────────────────────────────

    /// Fetch an entity, treating an empty body or a payload that carries
    /// nothing but the id as "does not exist".
    pub(crate) async fn get_entity<T>(&self, path: &str, id: i64) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned + Identified + Default + PartialEq,
    {
        let found: Option<T> = self.get(path).await?;
        Ok(found.filter(|e| !is_blank(e)).map(|mut e| {
            e.set_id(id);
            e
        }))
    }

    /// Fetch a JSON array of ids. An empty body yields an empty list.
    pub(crate) async fn get_ids(&self, path: &str) -> Result<Vec<i64>, Error> {
        Ok(self.get::<Vec<i64>>(path).await?.unwrap_or_default())
    }
}

/// Decode a success body. Empty, whitespace-only and `null` bodies are `None`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, Error> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        warn!("zero-length response body; skipping decode");
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(trimmed)),
            body: body.to_owned(),
        })
}

fn preview(body: &str) -> &str {
    body.char_indices()
        .nth(BODY_PREVIEW_LEN)
        .map_or(body, |(idx, _)| &body[..idx])
}

fn is_blank<T: Identified + Default + PartialEq>(entity: &T) -> bool {
    let mut probe = T::default();
    probe.set_id(entity.id());
    *entity == probe
}

/// Extract the new entity id from a create response.
pub(crate) fn created_id(block: Option<CreateResponseBlock>, kind: &str) -> Result<i64, Error> {
    let block = block.ok_or_else(|| Error::Rejected {
        message: format!("empty response when creating {kind}"),
    })?;
    if !block.success {
        return Err(Error::Rejected {
            message: block.error_message(),
        });
    }
    block
        .result
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::Rejected {
            message: format!("API did not return an id for the new {kind}"),
        })
}

/// Fail on an explicit `"Success": false`. An empty body counts as success.
pub(crate) fn ensure_success(block: Option<ResponseBlock>) -> Result<(), Error> {
    match block {
        Some(block) if !block.success => Err(Error::Rejected {
            message: block.error_message(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::models::Group;

    fn client(base: &str) -> Client {
        Client::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let c = client("https://api.example.com/config_api_v1/");
        assert_eq!(
            c.endpoint("/task/12").unwrap().as_str(),
            "https://api.example.com/config_api_v1/task/12"
        );
        let c = client("https://api.example.com/config_api_v1");
        assert_eq!(
            c.endpoint("devices/1").unwrap().as_str(),
            "https://api.example.com/config_api_v1/devices/1"
        );
    }

    #[test]
    fn empty_and_null_bodies_decode_to_none() {
        assert!(parse_body::<Group>("").unwrap().is_none());
        assert!(parse_body::<Group>("  \n").unwrap().is_none());
        assert!(parse_body::<Group>("null").unwrap().is_none());
    }

    #[test]
    fn malformed_body_keeps_raw_text() {
        let err = parse_body::<Vec<i64>>("{not json").unwrap_err();
        match err {
            Error::Deserialization { body, .. } => assert_eq!(body, "{not json"),
            other => panic!("expected Deserialization, got {other:?}"),
        }
    }

    #[test]
    fn id_only_payload_is_blank() {
        let group = Group {
            id: 42,
            ..Group::default()
        };
        assert!(is_blank(&group));

        let named = Group {
            id: 42,
            name: "ops".into(),
            ..Group::default()
        };
        assert!(!is_blank(&named));
    }

    #[test]
    fn created_id_requires_success_and_positive_id() {
        let ok = CreateResponseBlock {
            success: true,
            result: Some(77),
            error_description: Vec::new(),
        };
        assert_eq!(created_id(Some(ok), "task").unwrap(), 77);

        let rejected = CreateResponseBlock {
            success: false,
            result: None,
            error_description: vec!["Name is required".into()],
        };
        let err = created_id(Some(rejected), "task").unwrap_err();
        assert!(err.to_string().contains("Name is required"));

        assert!(created_id(None, "task").is_err());
    }

    #[tokio::test]
    async fn request_before_login_is_refused() {
        let c = client("http://127.0.0.1:9");
        let result: Result<Option<Vec<i64>>, Error> = c.get("groups").await;
        assert!(matches!(result, Err(Error::NotLoggedIn)));
    }
}
