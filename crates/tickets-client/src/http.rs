//! Reqwest transport for the tickets API.
//!
//! [`HttpClient`] owns the base URL and connection pool. Every call accepts
//! [`RequestOptions`]; when the options carry a cancellation token the call
//! races the token and returns [`ClientError::Cancelled`] as soon as it
//! fires. A cancelled call returns before any result is decoded, so callers
//! never observe partial state.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::ClientError;

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    cancel: Option<CancellationToken>,
}

impl RequestOptions {
    /// Options that abandon the call when `token` is cancelled.
    ///
    /// # Examples
    /// ```
    /// use tickets_client::RequestOptions;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// let token = CancellationToken::new();
    /// let options = RequestOptions::cancellable(token.clone());
    /// token.cancel();
    /// assert!(options.is_cancelled());
    /// ```
    #[must_use]
    pub const fn cancellable(token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
        }
    }

    /// Whether the attached token has already fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Run `fut` unless the token fires first.
    ///
    /// # Errors
    /// Returns [`ClientError::Cancelled`] when the token fires before `fut`
    /// completes, otherwise whatever `fut` yields.
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        match &self.cancel {
            None => fut.await,
            Some(token) => {
                if token.is_cancelled() {
                    return Err(ClientError::Cancelled);
                }
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(ClientError::Cancelled),
                    result = fut => result,
                }
            }
        }
    }
}

/// JSON-over-HTTP client rooted at the API base URL (e.g. `…/api`).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Build a client for `base_url` with an optional whole-request timeout.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] when `base_url` does not parse or
    /// cannot carry path segments, and [`ClientError::Transport`] when the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let invalid = |message: String| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            message,
        };
        let parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_owned()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClientError::from_reqwest(&err))?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidUrl`] if the base cannot take segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET` and decode a JSON body.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn get_json<T>(&self, segments: &[&str], options: &RequestOptions) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let request = self.request(Method::GET, segments)?;
        options
            .guard(async move { decode(send(request).await?).await })
            .await
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn post_json<B, T>(
        &self,
        segments: &[&str],
        body: &B,
        options: &RequestOptions,
    ) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments)?.json(body);
        options
            .guard(async move { decode(send(request).await?).await })
            .await
    }

    /// Send a body-less request whose success response carries no content.
    ///
    /// # Errors
    /// See [`ClientError`].
    pub async fn send_empty(
        &self,
        method: Method,
        segments: &[&str],
        options: &RequestOptions,
    ) -> Result<(), ClientError> {
        let request = self.request(method, segments)?;
        options
            .guard(async move { send(request).await.map(drop) })
            .await
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "sending request");
        Ok(self.client.request(method, url))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|err| ClientError::from_reqwest(&err))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ClientError::from_reqwest(&err))?;
    Err(ClientError::from_status(status.as_u16(), &bytes))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| ClientError::from_reqwest(&err))?;
    serde_json::from_slice(&bytes).map_err(|err| ClientError::Decode {
        message: err.to_string(),
    })
}
