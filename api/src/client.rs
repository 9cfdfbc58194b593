//! HTTP client for the remote content service, plus the fallback rule that
//! keeps pages populated when the service cannot help.

use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::model::{ContentRecord, Entity};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request to content service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("content service answered {status} for {entity}")]
    Status { entity: Entity, status: u16 },

    #[error("malformed {entity} payload: {source}")]
    Decode {
        entity: Entity,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only client for `{base_url}/{Entity}` collections.
///
/// Without a base URL the client is "offline": every query yields an empty
/// list, which callers turn into the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl ContentClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn offline() -> Self {
        Self::new(None)
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn endpoint(&self, entity: Entity) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|base| format!("{base}/{}", entity.name()))
    }

    /// Query one collection. An unconfigured client returns `Ok(vec![])`.
    pub async fn fetch<T: ContentRecord>(&self) -> Result<Vec<T>, ContentError> {
        let Some(url) = self.endpoint(T::ENTITY) else {
            return Ok(Vec::new());
        };

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                entity: T::ENTITY,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ContentError::Decode {
            entity: T::ENTITY,
            source,
        })
    }

    /// Query one collection and apply [`resolve`].
    pub async fn load<T: ContentRecord>(&self) -> Vec<T> {
        resolve(self.fetch::<T>().await)
    }
}

/// Records to display for a query result: the fetched list when it has
/// entries, otherwise the entity's defaults. Errors are logged, never shown.
pub fn resolve<T: ContentRecord>(fetched: Result<Vec<T>, ContentError>) -> Vec<T> {
    match fetched {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => {
            tracing::debug!(entity = %T::ENTITY, "no remote records, using defaults");
            T::defaults()
        }
        Err(err) => {
            tracing::warn!(
                entity = %T::ENTITY,
                "error loading from content service, using defaults: {err}"
            );
            T::defaults()
        }
    }
}
