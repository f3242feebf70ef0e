//! The request value passed to the HTTP client.

use std::collections::HashMap;

use serde_json::Value;

use super::errors::InvalidHttpRequestError;

/// The HTTP methods the Polar API uses.
///
/// The API updates resources with `PATCH` rather than `PUT`, so `PUT` is
/// deliberately absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource or collection.
    Get,
    /// Create a resource or invoke an action.
    Post,
    /// Partially update a resource.
    Patch,
    /// Delete or archive a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the method as an uppercase wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` if this method may carry a request body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// An HTTP request to be executed against the Polar API.
///
/// The `path` is relative to the versioned API base (e.g. `products` or
/// `checkouts/{id}`; no leading slash required). Query parameters and the
/// JSON body are attached with the builder-style [`with_query`] and
/// [`with_body`] methods.
///
/// [`with_query`]: HttpRequest::with_query
/// [`with_body`]: HttpRequest::with_body
///
/// # Example
///
/// ```rust
/// use polar_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::new(HttpMethod::Post, "products")
///     .with_body(json!({"name": "Widget", "organization_id": "org_1"}));
///
/// assert!(request.verify().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path relative to the versioned API base.
    pub path: String,
    /// Query parameters, appended in insertion-independent order.
    pub query: HashMap<String, String>,
    /// The JSON body, only meaningful for POST and PATCH.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Creates a request with no query parameters and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: HashMap::new(),
            body: None,
        }
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Verifies the request is well formed before it is sent.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidHttpRequestError`] if the path is empty, the
    /// path carries a scheme or host, or a body is attached to a method
    /// that cannot have one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim().is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if self.path.contains("://") {
            return Err(InvalidHttpRequestError::AbsolutePath {
                path: self.path.clone(),
            });
        }

        if self.body.is_some() && !self.method.allows_body() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.method.as_str(),
            });
        }

        Ok(())
    }

    /// Returns the path without a leading slash.
    #[must_use]
    pub fn normalized_path(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}
