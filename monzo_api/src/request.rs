//! Pure translation from a call's path, query, and body into a request descriptor.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::{AccessToken, Error, Params};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// The body shape chosen by the calling operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    None,
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Params),
    /// Sent as compact `application/json`.
    Json(Value),
}

/// Everything needed to put one request on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// `None` when the request has no body, never an empty placeholder.
    pub body: Option<String>,
}

/// Resolves paths against a base URL and attaches the bearer credential.
///
/// Encoding performs no I/O and holds no time- or randomness-dependent
/// state, so the same inputs always produce equal descriptors.
#[derive(Clone)]
pub struct RequestEncoder {
    base_url: Url,
    authorization: HeaderValue,
}

impl std::fmt::Debug for RequestEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestEncoder")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RequestEncoder {
    pub fn new(base_url: &str, token: &AccessToken) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| Error::InvalidToken)?;
        authorization.set_sensitive(true);
        Ok(Self {
            base_url,
            authorization,
        })
    }

    /// Builds the descriptor for one call.
    pub fn encode(
        &self,
        method: Method,
        path: &str,
        query: Option<&Params>,
        body: Body,
    ) -> Result<RequestDescriptor, Error> {
        let url = self.resolve(path, query)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());

        let body = match body {
            Body::None => None,
            Body::Form(params) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
                Some(params.to_form_urlencoded())
            }
            Body::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
                Some(serde_json::to_string(&value)?)
            }
        };

        Ok(RequestDescriptor {
            method,
            url,
            headers,
            body,
        })
    }

    fn resolve(&self, path: &str, query: Option<&Params>) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return Ok(url);
        };

        // Keys being set replace any pair already carried by the path.
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| !query.contains_key(k))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(query.iter());
        Ok(url)
    }
}
