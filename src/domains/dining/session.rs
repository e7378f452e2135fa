//! Session acquisition: hidden form tokens plus the session cookie.

use reqwest::header::{HeaderMap, SET_COOKIE};
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use super::client::DiningClient;
use super::error::DiningResult;
use super::selector::StaticSelector;

static VIEW_STATE_INPUT: StaticSelector = StaticSelector::new(r#"input[name="__VIEWSTATE"]"#);
static VIEW_STATE_GENERATOR_INPUT: StaticSelector =
    StaticSelector::new(r#"input[name="__VIEWSTATEGENERATOR"]"#);
static EVENT_VALIDATION_INPUT: StaticSelector =
    StaticSelector::new(r#"input[name="__EVENTVALIDATION"]"#);

/// Everything captured from one page load that a postback must echo back.
///
/// All fields come from the same GET. A handle is consumed by the single
/// query it authorizes, so it is intentionally not `Clone`.
#[derive(Default, PartialEq, Eq)]
pub struct SessionHandle {
    pub view_state: String,
    pub view_state_generator: String,
    pub event_validation: String,
    /// `Cookie` header value rebuilt from the page's `Set-Cookie` headers.
    pub cookie: String,
}

impl SessionHandle {
    /// Extract the hidden postback fields from a page.
    ///
    /// Missing inputs yield empty strings; upstream decides whether a
    /// submission without them is acceptable.
    pub fn from_page(html: &str, cookie: String) -> Self {
        let document = Html::parse_document(html);

        Self {
            view_state: hidden_value(&document, &VIEW_STATE_INPUT),
            view_state_generator: hidden_value(&document, &VIEW_STATE_GENERATOR_INPUT),
            event_validation: hidden_value(&document, &EVENT_VALIDATION_INPUT),
            cookie,
        }
    }
}

/// View state blobs run to kilobytes and the cookie is a session secret.
impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("view_state_len", &self.view_state.len())
            .field("view_state_generator", &self.view_state_generator)
            .field("event_validation_len", &self.event_validation.len())
            .field("cookie", &"[REDACTED]")
            .finish()
    }
}

fn hidden_value(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .unwrap_or_default()
        .to_string()
}

/// Rebuild a `Cookie` header from every `Set-Cookie` response header.
///
/// Only the leading `name=value` pair of each header is kept; attributes
/// such as `Path` or `HttpOnly` are dropped.
pub fn session_cookie(headers: &HeaderMap) -> String {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

impl DiningClient {
    /// Load the menu page and capture a fresh, single-use session.
    #[instrument(skip(self))]
    pub async fn acquire_session(&self) -> DiningResult<SessionHandle> {
        let response = self.get_page(None).await?;
        let cookie = session_cookie(response.headers());
        let html = response.text().await?;

        let session = SessionHandle::from_page(&html, cookie);
        debug!(?session, "Acquired dining page session");
        Ok(session)
    }
}
