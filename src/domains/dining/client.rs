//! HTTP client for the dining menu page.
//!
//! The page is an ASP.NET Web Forms postback page: every operation starts
//! with a plain GET, and menu queries replay that GET's hidden fields in a
//! POST to the same URL. The client keeps no cookie jar; session cookies
//! are carried explicitly inside a [`SessionHandle`](super::SessionHandle).

use reqwest::{Client, Response, header::COOKIE};
use tracing::warn;

use super::error::{DiningError, DiningResult};
use crate::core::config::DiningConfig;

/// Dining menu page queried when nothing else is configured.
pub const DEFAULT_MENU_URL: &str = "https://rdeapps.stanford.edu/dininghallmenu/Menu.aspx";

/// Client for the dining menu site.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct DiningClient {
    http: Client,
    menu_url: String,
}

impl DiningClient {
    /// Build a client from configuration.
    pub fn new(config: &DiningConfig) -> DiningResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .build()?;

        Ok(Self {
            http,
            menu_url: config.menu_url.clone(),
        })
    }

    /// Load the menu page, optionally presenting a session cookie.
    pub(super) async fn get_page(&self, cookie: Option<&str>) -> DiningResult<Response> {
        let mut request = self.http.get(&self.menu_url);
        if let Some(cookie) = cookie.filter(|c| !c.is_empty()) {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        ensure_success(response, "GET dining page")
    }

    /// Post an URL-encoded form back to the menu page.
    pub(super) async fn post_form(&self, body: String, cookie: &str) -> DiningResult<Response> {
        let mut request = self
            .http
            .post(&self.menu_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body);
        if !cookie.is_empty() {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        ensure_success(response, "POST menu query")
    }
}

fn ensure_success(response: Response, action: &'static str) -> DiningResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!("{} failed with status {}", action, status);
        Err(DiningError::upstream(action, status))
    }
}
