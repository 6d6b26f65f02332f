// Workshop server HTTP client
//
// Wraps `reqwest::Client` with URL construction and envelope unwrapping.
// Every server response carries the `{ ok, error, data }` envelope; all
// methods return unwrapped `data` payloads -- the envelope is stripped
// before the caller sees it.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::error::Error;
use crate::records::{DeviceRecord, PartRecord};
use crate::transport::TransportConfig;

/// Response envelope used by every workshop-server endpoint.
#[derive(serde::Deserialize)]
struct Envelope<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    data: Option<T>,
}

#[derive(Serialize)]
struct AdviceRequest<'a> {
    prompt: &'a str,
}

#[derive(serde::Deserialize)]
struct AdviceReply {
    text: String,
}

/// Raw HTTP client for the workshop server's collection API.
///
/// One table per entity kind, keyed by `id`. Upserts are full-record
/// replaces: the server overwrites every mutable column of an existing
/// row rather than a narrowed field set, matching the local store.
pub struct WorkshopClient {
    http: reqwest::Client,
    base_url: Url,
}

impl WorkshopClient {
    /// Create a new client from a base URL and transport config.
    ///
    /// The `base_url` should be the server root (e.g.
    /// `http://192.168.1.50:8700`); the `api/v1/` prefix is appended per
    /// request.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/v1/{path}`
    fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/v1/{path}"))?)
    }

    // ── Readiness / schema ───────────────────────────────────────────

    /// Probe the server and ensure both collection tables exist.
    ///
    /// This is the call `fixly-core` uses to pick Remote vs Local mode:
    /// any error here (unreachable host, non-success status, HTML error
    /// page, malformed envelope) means the server cannot be trusted for
    /// the session.
    pub async fn ensure_schema(&self) -> Result<(), Error> {
        self.post_unit("setup").await
    }

    // ── Devices ──────────────────────────────────────────────────────

    /// Fetch every row of the devices table.
    pub async fn list_devices(&self) -> Result<Vec<DeviceRecord>, Error> {
        self.get("devices").await
    }

    /// Insert or fully replace one device row, keyed by `id`.
    pub async fn upsert_device(&self, record: &DeviceRecord) -> Result<(), Error> {
        self.put_unit("devices", record).await
    }

    /// Delete the device row with the given id. Absent ids succeed.
    pub async fn delete_device(&self, id: Uuid) -> Result<(), Error> {
        self.delete_unit(&format!("devices/{id}")).await
    }

    // ── Parts ────────────────────────────────────────────────────────

    /// Fetch every row of the parts table.
    pub async fn list_parts(&self) -> Result<Vec<PartRecord>, Error> {
        self.get("parts").await
    }

    /// Insert or fully replace one part row, keyed by `id`.
    pub async fn upsert_part(&self, record: &PartRecord) -> Result<(), Error> {
        self.put_unit("parts", record).await
    }

    /// Delete the part row with the given id. Absent ids succeed.
    pub async fn delete_part(&self, id: Uuid) -> Result<(), Error> {
        self.delete_unit(&format!("parts/{id}")).await
    }

    // ── Advice ───────────────────────────────────────────────────────

    /// Ask the server's language-model relay for a diagnostic suggestion.
    ///
    /// Fallible at this layer; the never-fails guarantee lives in
    /// `fixly-core`, which turns any error into a fallback message.
    pub async fn advice(&self, prompt: &str) -> Result<String, Error> {
        let url = self.url("advice")?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(&AdviceRequest { prompt })
            .send()
            .await?;
        let reply: AdviceReply = Self::require_data(Self::parse_envelope(resp).await?)?;
        Ok(reply.text)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope's `data`.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::require_data(Self::parse_envelope(resp).await?)
    }

    /// Send a PUT request with a JSON body; only the `ok` flag matters.
    async fn put_unit(&self, path: &str, body: &(impl Serialize + Sync)) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::parse_envelope::<serde_json::Value>(resp).await?;
        Ok(())
    }

    /// Send a bodyless POST request; only the `ok` flag matters.
    async fn post_unit(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        Self::parse_envelope::<serde_json::Value>(resp).await?;
        Ok(())
    }

    /// Send a DELETE request; only the `ok` flag matters.
    async fn delete_unit(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::parse_envelope::<serde_json::Value>(resp).await?;
        Ok(())
    }

    /// Parse the `{ ok, error, data }` envelope, returning `data` when
    /// `ok` is true or an [`Error::Api`] otherwise.
    ///
    /// Rejects responses whose content type is not JSON before touching
    /// the body: proxies and captive portals answer with HTML error
    /// pages and HTTP 200, and those must never parse as an empty
    /// collection.
    async fn parse_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                message: body[..body.len().min(200)].to_owned(),
                status: status.as_u16(),
            });
        }

        if !content_type.starts_with("application/json") {
            return Err(Error::UnexpectedContentType { content_type });
        }

        let body = resp.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        if envelope.ok {
            Ok(envelope.data)
        } else {
            Err(Error::Api {
                message: envelope
                    .error
                    .unwrap_or_else(|| "server reported failure without a message".into()),
                status: status.as_u16(),
            })
        }
    }

    /// Unwrap `data` for endpoints where it is mandatory.
    fn require_data<T>(data: Option<T>) -> Result<T, Error> {
        data.ok_or_else(|| Error::Deserialization {
            message: "envelope is missing the data field".into(),
            body: String::new(),
        })
    }
}
