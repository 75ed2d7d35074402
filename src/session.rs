//! 5mods HTTP Session
//!
//! Wraps a cookie-holding `reqwest` client and the current CSRF token.
//! The site rotates the token on every page load, so it is refreshed from the
//! latest page before each state-mutating request.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{PublishError, Stage};
use crate::extract;

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRF-Token";

pub const USER_AGENT: &str = concat!(
    "fangy/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/justalemon/Fangy)"
);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully read response
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    pub async fn read(response: reqwest::Response, stage: Stage) -> Result<Self, PublishError> {
        let url = response.url().to_string();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(PublishError::transport(stage))?;

        Ok(Self { url, status, body })
    }
}

/// HTTP session against the 5mods site
pub struct Session {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl Session {
    /// Create a new session for the site at `base_url`
    pub fn new(base_url: &str) -> Result<Self, PublishError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PublishError::transport(Stage::Client))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token: None,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    /// GET a page, whatever its status
    pub async fn get(&self, path: &str, stage: Stage) -> Result<Page, PublishError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(PublishError::transport(stage))?;

        let page = Page::read(response, stage).await?;
        debug!("GET {} -> {}", page.url, page.status);
        Ok(page)
    }

    /// Take the CSRF token from an already loaded page
    pub fn update_csrf(&mut self, page: &Page) -> Result<(), PublishError> {
        if page.status != StatusCode::OK {
            return Err(PublishError::CsrfPage {
                url: page.url.clone(),
                status: page.status,
            });
        }

        let token = extract::csrf_token(&page.body).ok_or_else(|| {
            PublishError::MissingCsrfToken {
                url: page.url.clone(),
            }
        })?;

        debug!("Updated CSRF token from {}", page.url);
        self.csrf_token = Some(token);
        Ok(())
    }

    /// Load `path` and take the CSRF token from it
    pub async fn reload_csrf(&mut self, path: &str) -> Result<(), PublishError> {
        let page = self.get(path, Stage::Csrf).await?;
        self.update_csrf(&page)
    }

    fn with_csrf(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.csrf_token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }

    /// Form-encoded POST carrying the CSRF token
    pub fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> RequestBuilder {
        self.with_csrf(self.client.post(self.url(path)).form(form))
    }

    /// JSON PATCH carrying the CSRF token
    pub fn patch_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.with_csrf(self.client.patch(self.url(path)).json(body))
    }
}
