//! HTTP client for the Monzo API.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::request::{Body, RequestEncoder};
use crate::{AccessToken, ApiError, Error, Params};

/// Production endpoint of the Monzo API.
pub const MONZO_API_URL: &str = "https://api.monzo.com";

const USER_AGENT: &str = concat!("monzo-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Monzo API.
///
/// Holds the bearer token and base URL for its whole lifetime. There is one
/// method per request shape the API uses; each performs exactly one exchange,
/// with no retry and no timeout of its own. Cloning is cheap and clones share
/// the connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    encoder: RequestEncoder,
}

impl Client {
    /// Creates a client pointing at the production Monzo API.
    pub fn new(token: AccessToken) -> Result<Self, Error> {
        Self::with_base_url(MONZO_API_URL, token)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, token: AccessToken) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self {
            http,
            encoder: RequestEncoder::new(base_url, &token)?,
        })
    }

    /// GET with optional query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Params>,
    ) -> Result<T, Error> {
        self.send(Method::GET, path, query, Body::None).await
    }

    /// POST with a form-encoded body.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Params,
    ) -> Result<T, Error> {
        self.send(Method::POST, path, None, Body::Form(body)).await
    }

    /// PUT with a form-encoded body.
    pub async fn put_form<T: DeserializeOwned>(&self, path: &str, body: Params) -> Result<T, Error> {
        self.send(Method::PUT, path, None, Body::Form(body)).await
    }

    /// PATCH with a form-encoded body.
    pub async fn patch_form<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Params,
    ) -> Result<T, Error> {
        self.send(Method::PATCH, path, None, Body::Form(body)).await
    }

    /// PUT with a JSON body.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(Error::Encode)?;
        self.send(Method::PUT, path, None, Body::Json(body)).await
    }

    /// DELETE with optional query parameters.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Params>,
    ) -> Result<T, Error> {
        self.send(Method::DELETE, path, query, Body::None).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Params>,
        body: Body,
    ) -> Result<T, Error> {
        let req = self.encoder.encode(method, path, query, body)?;
        let method = req.method.clone();

        let mut builder = self.http.request(req.method, req.url).headers(req.headers);
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::debug!("{} {} failed before a response arrived: {}", method, path, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let err = ApiError::from_body(status.as_u16(), &text);
            tracing::debug!("{} {} rejected: {}", method, path, err);
            return Err(err.into());
        }

        decode_body(&text)
    }
}

/// Decodes a success body. An empty body decodes as `{}`.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    let text = if text.is_empty() { "{}" } else { text };
    Ok(serde_json::from_str(text)?)
}
