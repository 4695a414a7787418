//! REST clinic [`Backend`] implementation.

mod dto;
mod impls;

use std::{sync::Arc, time};

use derive_more::{Display, Error as StdError, From};
use reqwest::StatusCode;
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;
use tracerr::Traced;
use tracing as log;

use crate::infra::backend;
#[cfg(doc)]
use crate::infra::Backend;

/// [`Rest`] client configuration.
#[derive(Debug)]
pub struct Config {
    /// Base URL of the clinic backend API.
    pub url: String,

    /// Bearer token to authorize requests with, if required.
    pub token: Option<SecretString>,

    /// Timeout of a single request.
    pub timeout: time::Duration,
}

/// REST client of the clinic [`Backend`].
#[derive(Clone, Debug)]
pub struct Rest {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL without a trailing slash.
    url: String,

    /// Bearer token to authorize requests with.
    token: Option<Arc<SecretString>>,
}

impl Rest {
    /// Creates a new [`Rest`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to build the underlying HTTP client.
    pub fn new(conf: Config) -> Result<Self, Traced<backend::Error>> {
        let Config {
            url,
            token,
            timeout,
        } = conf;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_owned(),
            token: token.map(Arc::new),
        })
    }

    /// Fetches JSON from the provided `path` relative to the base URL.
    ///
    /// # Errors
    ///
    /// If the request fails or the backend responds with a non-success
    /// status.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Traced<backend::Error>> {
        self.get_opt(path, query)
            .await
            .map_err(tracerr::wrap!())?
            .ok_or_else(|| {
                tracerr::new!(Error::Status {
                    status: StatusCode::NOT_FOUND,
                    body: format!("`{path}` not found"),
                })
            })
            .map_err(tracerr::map_from)
    }

    /// Fetches JSON from the provided `path` relative to the base URL,
    /// returning [`None`] if the backend responds with `404 Not Found`.
    ///
    /// # Errors
    ///
    /// If the request fails or the backend responds with another non-success
    /// status.
    async fn get_opt<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, Traced<backend::Error>> {
        let url = format!("{}/{path}", self.url);
        log::debug!("GET {url} {query:?}");

        let mut req = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token.expose_secret());
        }

        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(tracerr::new!(Error::Status { status, body }))
                .map_err(tracerr::map_from);
        }

        resp.json()
            .await
            .map(Some)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)
    }
}

/// [`Rest`] client error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to perform an HTTP request or to decode its response.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),

    /// Backend responded with a non-success status.
    #[display("backend responded with `{status}`: {body}")]
    #[from(ignore)]
    Status {
        /// Status of the response.
        status: StatusCode,

        /// Body of the response.
        body: String,
    },
}
