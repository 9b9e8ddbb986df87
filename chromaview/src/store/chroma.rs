//! ChromaDB REST client.
//!
//! Speaks either the `/api/v1` surface (ChromaDB 0.4 and 0.5) or the
//! `/api/v2` surface (ChromaDB 0.6 onward, the only one in 1.x).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use super::{FetchOptions, StoreClient, StoreConnector};
use crate::error::{BridgeError, Result};

pub const DEFAULT_TENANT: &str = "default_tenant";
pub const DEFAULT_DATABASE: &str = "default_database";

/// REST surface of the ChromaDB server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Tenant and database travel as query parameters.
    V1,
    /// Tenant and database are path segments.
    #[default]
    V2,
}

impl ApiVersion {
    fn prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(ApiVersion::V1),
            "v2" | "2" => Ok(ApiVersion::V2),
            other => Err(format!(
                "unsupported ChromaDB API version '{}' (expected v1 or v2)",
                other
            )),
        }
    }
}

/// Tenant, database and API surface every request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaSettings {
    pub tenant: String,
    pub database: String,
    pub api_version: ApiVersion,
}

impl Default for ChromaSettings {
    fn default() -> Self {
        Self {
            tenant: DEFAULT_TENANT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            api_version: ApiVersion::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChromaConnector {
    settings: ChromaSettings,
}

impl ChromaConnector {
    pub fn new(settings: ChromaSettings) -> Self {
        Self { settings }
    }
}

impl StoreConnector for ChromaConnector {
    fn connect(&self, host: &str, port: u16) -> Result<Arc<dyn StoreClient>> {
        let client = ChromaClient::new(host, port, self.settings.clone())?;
        Ok(Arc::new(client))
    }
}

#[derive(Debug, Deserialize)]
struct Heartbeat {
    #[serde(rename = "nanosecond heartbeat")]
    nanos: u64,
}

#[derive(Debug, Deserialize)]
struct CollectionModel {
    id: String,
    name: String,
}

#[derive(Debug, Clone)]
pub struct ChromaClient {
    http: Client,
    base: Url,
    endpoint: String,
    settings: ChromaSettings,
}

impl ChromaClient {
    pub fn new(host: &str, port: u16, settings: ChromaSettings) -> Result<Self> {
        let endpoint = format!("http://{}:{}", host, port);
        let base = Url::parse(&format!("{}/api/{}/", endpoint, settings.api_version.prefix()))
            .map_err(|e| BridgeError::invalid_parameter("host", format!("'{}': {}", host, e)))?;
        let http = Client::builder()
            .build()
            .map_err(|e| BridgeError::unknown("ClientBuildError", e.to_string()))?;

        Ok(Self {
            http,
            base,
            endpoint,
            settings,
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| BridgeError::unknown("UrlError", format!("cannot extend {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL under the collections resource of the configured tenant and database.
    fn collections(&self, rest: &[&str]) -> Result<Url> {
        match self.settings.api_version {
            ApiVersion::V1 => {
                let mut segments = vec!["collections"];
                segments.extend_from_slice(rest);
                let mut url = self.url(&segments)?;
                url.query_pairs_mut()
                    .append_pair("tenant", &self.settings.tenant)
                    .append_pair("database", &self.settings.database);
                Ok(url)
            }
            ApiVersion::V2 => {
                let mut segments = vec![
                    "tenants",
                    self.settings.tenant.as_str(),
                    "databases",
                    self.settings.database.as_str(),
                    "collections",
                ];
                segments.extend_from_slice(rest);
                self.url(&segments)
            }
        }
    }

    async fn resolve(&self, name: &str) -> Result<CollectionModel> {
        let url = self.collections(&[name])?;
        let resp = check(self.http.get(url).send().await?).await?;
        let model: CollectionModel = resp.json().await?;
        tracing::debug!(name = %model.name, id = %model.id, "Resolved collection");
        Ok(model)
    }
}

#[async_trait]
impl StoreClient for ChromaClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn heartbeat(&self) -> Result<u64> {
        let url = self.url(&["heartbeat"])?;
        let resp = check(self.http.get(url).send().await?).await?;
        let beat: Heartbeat = resp.json().await?;
        Ok(beat.nanos)
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let url = self.collections(&[])?;
        let resp = check(self.http.get(url).send().await?).await?;
        let models: Vec<CollectionModel> = resp.json().await?;
        Ok(models.into_iter().map(|m| m.name).collect())
    }

    async fn get_records(&self, collection: &str, options: FetchOptions) -> Result<JsonValue> {
        let model = self.resolve(collection).await?;
        let url = self.collections(&[model.id.as_str(), "get"])?;
        let body = json!({ "include": options.include() });
        let resp = check(self.http.post(url).json(&body).send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Turn a non-2xx reply into a store error carrying the server's explanation.
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<JsonValue>(&text)
        .ok()
        .and_then(|body| {
            ["error", "message", "detail"]
                .iter()
                .filter_map(|key| body.get(*key))
                .filter_map(|v| v.as_str().map(str::to_string))
                .reduce(|a, b| format!("{}: {}", a, b))
        })
        .unwrap_or(text);

    Err(BridgeError::store(format!("{} ({})", detail.trim(), status)))
}
